//! A menu-driven session: generate, then regenerate, copy, or score something else.

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

use crate::config::Config;
use crate::generate::Generated;
use crate::{GenerationOptions, ProgError};

const MENU: &[&str] = &[
    "Generate another password",
    "Copy the password to the clipboard",
    "Evaluate a password of your own",
    "Quit",
];

pub(crate) fn run(options: GenerationOptions) -> Result<(), ProgError> {
    let config = Config::resolve(&options)?;
    let request = config.request();
    let mut rng = passgen::SecureRandom::new();

    let mut current = Generated::new(&mut rng, &request)?;
    show(&current, &request);
    loop {
        let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("What next?")
            .items(MENU)
            .default(0)
            .interact_opt()
            .context("failed to query your selection")?;
        match selection {
            Some(0) => {
                current = Generated::new(&mut rng, &request)?;
                show(&current, &request);
            }
            Some(1) => {
                crate::clipboard::send_to_clipboard(current.password.as_str().as_bytes())?;
                eprintln!("Copied to the clipboard.");
            }
            Some(2) => {
                let password = crate::evaluate::prompt_password()?;
                let result = passgen::evaluate(password.as_str());
                eprintln!("{}", crate::display::summary(&result));
            }
            _ => return Ok(()),
        }
    }
}

fn show(generated: &Generated, request: &passgen::GenerationRequest) {
    println!("{}", generated.password.as_str());
    eprintln!("{}", crate::display::summary(&generated.result));
    if let Some(note) = generated.length_note(request) {
        eprintln!("{note}");
    }
}
