//! Generation defaults read from a YAML file, overridden by command-line flags.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use passgen::{CharacterClass, GenerationRequest};
use serde::Deserialize;

use crate::{GenerationOptions, ProgError};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
    /// Characters to exclude, written as one string (e.g. `"O0Il1"`).
    pub exclude: String,
    /// Always copy generated passwords to the clipboard.
    pub copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Config {
            length: request.length,
            classes: request.classes.into_iter().collect(),
            exclude: String::new(),
            copy: false,
        }
    }
}

impl Config {
    /// Load the config file (if any) and layer the command-line options on top.
    ///
    /// An explicitly named config file must exist; the default one is optional.
    pub(crate) fn resolve(options: &GenerationOptions) -> Result<Config, ProgError> {
        let mut config = match &options.config {
            Some(path) => Config::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Config::from_file(&path)?,
                _ => Config::default(),
            },
        };
        config.apply(options);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Config, ProgError> {
        let load = || -> anyhow::Result<Config> {
            let contents = fs::read_to_string(path).context("failed to read file")?;
            if contents.trim().is_empty() {
                return Ok(Config::default());
            }
            serde_yaml::from_str(&contents).context("failed to parse YAML")
        };
        let config = load().map_err(|err| ProgError::Config(path.to_owned(), err))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn apply(&mut self, options: &GenerationOptions) {
        if let Some(length) = options.length {
            self.length = length;
        }
        if let Some(classes) = &options.classes {
            self.classes = classes.clone();
        }
        if let Some(exclude) = &options.exclude {
            self.exclude = exclude.clone();
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ProgError> {
        if self.length == 0 {
            return Err(ProgError::InvalidLength);
        }
        Ok(())
    }

    pub(crate) fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length)
            .with_classes(self.classes.iter().copied())
            .excluding(self.exclude.chars())
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".config");
    p.push("passgen");
    p.push("config.yaml");
    Some(p)
}
