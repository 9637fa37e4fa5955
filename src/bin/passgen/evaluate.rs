use std::io::{self, Read, Write};

use anyhow::Context;
use passgen::Secret;

use crate::ProgError;

pub(crate) fn evaluate(password: Option<String>, stdin: bool, json: bool) -> Result<(), ProgError> {
    let password = match password {
        Some(p) => Secret::from(p),
        None if stdin => read_stdin()?,
        None => prompt_password()?,
    };
    let result = passgen::evaluate(password.as_str());

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, &result).context("failed to write JSON to stdout")?;
        writeln!(stdout).context("failed to write to stdout")?;
    } else {
        writeln!(stdout, "{}", crate::display::summary(&result))
            .context("failed to write to stdout")?;
    }
    Ok(())
}

pub(crate) fn prompt_password() -> anyhow::Result<Secret> {
    Ok(Secret::from(
        rpassword::prompt_password("Password to evaluate: ")
            .context("failed to read password from TTY")?,
    ))
}

fn read_stdin() -> anyhow::Result<Secret> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read password from stdin")?;
    Ok(Secret::from(strip_line_ending(input)))
}

/// Drop a single trailing newline, as left by `echo` or a heredoc.
fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_line_ending_is_stripped() {
        assert_eq!(strip_line_ending("abc\n".to_owned()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".to_owned()), "abc");
        assert_eq!(strip_line_ending("abc\n\n".to_owned()), "abc\n");
        assert_eq!(strip_line_ending("  abc ".to_owned()), "  abc ");
        assert_eq!(strip_line_ending(String::new()), "");
    }
}
