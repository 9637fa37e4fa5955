//! How strength results look on the terminal. Names and colors are a presentation concern, so
//! they live here rather than in the library.

use console::{style, StyledObject};
use passgen::{EvaluationResult, StrengthLevel};

pub(crate) fn label(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::Empty => "Empty",
        StrengthLevel::Weak => "Weak",
        StrengthLevel::Medium => "Medium",
        StrengthLevel::Strong => "Strong",
        StrengthLevel::VeryStrong => "Very strong",
    }
}

pub(crate) fn styled_label(level: StrengthLevel) -> StyledObject<&'static str> {
    let label = style(label(level));
    match level {
        StrengthLevel::Empty => label,
        StrengthLevel::Weak => label.red().bold(),
        StrengthLevel::Medium => label.yellow().bold(),
        StrengthLevel::Strong => label.green().bold(),
        StrengthLevel::VeryStrong => label.cyan().bold(),
    }
}

/// `Strength: Strong (71.2 bits of entropy)`
pub(crate) fn summary(result: &EvaluationResult) -> String {
    format!(
        "Strength: {} ({:.1} bits of entropy)",
        styled_label(result.level),
        result.entropy_bits
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_level_and_entropy() {
        console::set_colors_enabled(false);
        let summary = summary(&passgen::evaluate("Tr7$mK9!Lp2"));
        assert_eq!(summary, "Strength: Very strong (70.5 bits of entropy)");
    }

    #[test]
    fn empty_has_a_label() {
        assert_eq!(label(passgen::evaluate("").level), "Empty");
    }
}
