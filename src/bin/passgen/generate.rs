use std::io::{self, Write};

use anyhow::Context;
use passgen::{EvaluationResult, GenerationRequest, Secret};
use serde::Serialize;

use crate::config::Config;
use crate::{GenerationOptions, ProgError};

/// A freshly generated password, along with how strong it scored.
#[derive(Serialize)]
pub(crate) struct Generated {
    pub password: Secret,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

impl Generated {
    pub(crate) fn new<R>(rng: &mut R, request: &GenerationRequest) -> Result<Generated, ProgError>
    where
        R: rand::Rng + rand::CryptoRng,
    {
        let password = passgen::generate_password(rng, request)?;
        let result = passgen::evaluate(password.as_str());
        Ok(Generated { password, result })
    }

    /// Explain why the password is longer than asked for, if it is.
    pub(crate) fn length_note(&self, request: &GenerationRequest) -> Option<String> {
        (self.password.len() > request.length).then(|| {
            format!(
                "Note: the length was raised from {} to {} so that every selected character \
                 class appears at least once.",
                request.length,
                self.password.len()
            )
        })
    }
}

pub(crate) fn generate(
    options: GenerationOptions,
    count: usize,
    copy: bool,
    json: bool,
) -> Result<(), ProgError> {
    if count == 0 {
        return Err(ProgError::InvalidCount);
    }
    let config = Config::resolve(&options)?;
    let request = config.request();

    let mut rng = passgen::SecureRandom::new();
    let generated = (0..count)
        .map(|_| Generated::new(&mut rng, &request))
        .collect::<Result<Vec<_>, _>>()?;

    let mut stdout = io::stdout().lock();
    if json {
        for item in &generated {
            serde_json::to_writer(&mut stdout, item).context("failed to write JSON to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        }
    } else if let [item] = generated.as_slice() {
        writeln!(stdout, "{}", item.password.as_str()).context("failed to write to stdout")?;
        eprintln!("{}", crate::display::summary(&item.result));
    } else {
        print_table(&generated, &mut stdout)?;
    }
    drop(stdout);

    if let Some(item) = generated.first() {
        if let Some(note) = item.length_note(&request) {
            eprintln!("{note}");
        }
    }

    if copy || config.copy {
        if let Some(item) = generated.last() {
            crate::clipboard::send_to_clipboard(item.password.as_str().as_bytes())?;
            eprintln!("Copied to the clipboard.");
        }
    }
    Ok(())
}

fn print_table(generated: &[Generated], output: impl Write) -> Result<(), ProgError> {
    struct Row<'a> {
        password: &'a str,
        strength: &'static str,
        entropy: String,
    }

    impl crate::table::TableDisplay for Row<'_> {
        fn columns() -> usize {
            3
        }

        fn column_name(column_index: usize) -> &'static str {
            match column_index {
                0 => "Password",
                1 => "Strength",
                2 => "Entropy (bits)",
                _ => panic!(),
            }
        }

        fn item(&self, column_index: usize) -> &str {
            match column_index {
                0 => self.password,
                1 => self.strength,
                2 => &self.entropy,
                _ => panic!(),
            }
        }
    }

    let rows = generated
        .iter()
        .map(|item| Row {
            password: item.password.as_str(),
            strength: crate::display::label(item.result.level),
            entropy: format!("{:.1}", item.result.entropy_bits),
        })
        .collect::<Vec<_>>();
    crate::table::display_table(&rows, output).context("failed to output table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use passgen::CharacterClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn json_has_password_and_result_fields() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let generated = Generated::new(&mut rng, &GenerationRequest::default()).unwrap();
        let value = serde_json::to_value(&generated).unwrap();
        assert_eq!(value["password"].as_str().unwrap().chars().count(), 16);
        assert!(value["level"].is_string());
        assert!(value["entropy_bits"].as_f64().unwrap() > 0.0);
        assert!(value["score"].is_i64());
    }

    #[test]
    fn length_note_only_when_grown() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let short = GenerationRequest::new(2).with_classes(CharacterClass::ALL);
        let generated = Generated::new(&mut rng, &short).unwrap();
        assert!(generated.length_note(&short).unwrap().contains("from 2 to 4"));

        let request = GenerationRequest::default();
        let generated = Generated::new(&mut rng, &request).unwrap();
        assert!(generated.length_note(&request).is_none());
    }

    #[test]
    fn generation_errors_become_user_messages() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let err = Generated::new(&mut rng, &GenerationRequest::new(8)).err().unwrap();
        assert!(matches!(err, ProgError::NoClassEnabled));

        let exhausted = GenerationRequest::new(8)
            .with_classes([CharacterClass::Digit])
            .excluding("0123456789".chars());
        let err = Generated::new(&mut rng, &exhausted).err().unwrap();
        assert!(matches!(err, ProgError::PoolExhausted));
    }

    #[test]
    fn zero_count_is_rejected() {
        let options = GenerationOptions {
            length: None,
            classes: None,
            exclude: None,
            config: None,
        };
        assert!(matches!(
            generate(options, 0, false, false),
            Err(ProgError::InvalidCount)
        ));
    }

    #[test]
    fn table_lists_every_password() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let request = GenerationRequest::default();
        let generated = (0..3)
            .map(|_| Generated::new(&mut rng, &request).unwrap())
            .collect::<Vec<_>>();
        let mut out = Vec::new();
        print_table(&generated, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 5);
        for item in &generated {
            assert!(out.contains(item.password.as_str()));
        }
    }
}
