use std::path::PathBuf;
use std::process;

use clap::Parser;
use passgen::{CharacterClass, GenerationError};

mod clipboard;
mod config;
mod display;
mod evaluate;
mod generate;
mod interactive;
mod table;

#[derive(Parser)]
#[command(version, about = "Generate random passwords and score password strength.")]
enum Args {
    /// Generate new passwords, and report how strong they are.
    Generate {
        #[command(flatten)]
        options: GenerationOptions,
        /// How many passwords to generate.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
        /// Copy the (last) generated password to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Print one JSON object per password instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Score the strength of a password. Prompts for it if it isn't given.
    Evaluate {
        password: Option<String>,
        /// Read the password from stdin instead of prompting.
        #[arg(long, conflicts_with = "password")]
        stdin: bool,
        #[arg(long)]
        json: bool,
    },
    /// Generate a password, then choose to regenerate it, copy it, or score another password.
    Interactive {
        #[command(flatten)]
        options: GenerationOptions,
    },
}

/// Generation settings that can be given on the command line. Anything left unset falls back to
/// the config file, then to the built-in defaults.
#[derive(clap::Args)]
pub(crate) struct GenerationOptions {
    /// Target password length.
    #[arg(long, short)]
    length: Option<usize>,
    /// Character classes to use, comma separated (upper, lower, digit, symbol).
    #[arg(long, short, value_delimiter = ',')]
    classes: Option<Vec<CharacterClass>>,
    /// Characters that must never appear in the password.
    #[arg(long, short = 'x')]
    exclude: Option<String>,
    /// Config file to read defaults from.
    #[arg(long, env = "PASSGEN_CONFIG")]
    config: Option<PathBuf>,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate {
            options,
            count,
            copy,
            json,
        } => generate::generate(options, count, copy, json)?,
        Args::Evaluate {
            password,
            stdin,
            json,
        } => evaluate::evaluate(password, stdin, json)?,
        Args::Interactive { options } => interactive::run(options)?,
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ProgError {
    #[error("Select at least one character class (upper, lower, digit, symbol).")]
    NoClassEnabled,
    #[error(
        "Every character of the selected classes is excluded; exclude fewer characters or \
         select more classes."
    )]
    PoolExhausted,
    #[error("The password length must be at least 1.")]
    InvalidLength,
    #[error("The number of passwords to generate must be at least 1.")]
    InvalidCount,
    #[error("Failed to load config file {0:?}: {1:#}")]
    Config(PathBuf, #[source] anyhow::Error),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<GenerationError> for ProgError {
    fn from(err: GenerationError) -> ProgError {
        match err {
            GenerationError::NoClassEnabled => ProgError::NoClassEnabled,
            GenerationError::PoolExhausted => ProgError::PoolExhausted,
        }
    }
}
