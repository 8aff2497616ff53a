//! Deterministic credential strength scoring.
//!
//! The score is additive: length tier, one point per character class
//! present, bonuses for length ≥ 16 and for using the generator's fixed
//! symbol set, and a penalty for runs of three identical characters.
//! Feedback strings accumulate in rule order and are suitable for direct
//! display.

use std::sync::OnceLock;

use regex::Regex;

/// Strength category derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Result of scoring a credential.
#[derive(Debug, Clone)]
pub struct StrengthReport {
    /// The raw additive score.  May be negative; never clamped.
    pub score: i32,
    /// Improvement hints, in rule order.
    pub feedback: Vec<String>,
    pub category: Strength,
}

/// Matches any character from the generator's fixed symbol set.
fn symbol_set_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[!@#$%^&*()_+\-=\[\]{}|;:,.<>?]").expect("symbol set pattern is valid")
    })
}

/// Score a credential string.  Pure and deterministic.
pub fn score(credential: &str) -> StrengthReport {
    let mut score = 0i32;
    let mut feedback = Vec::new();

    let length = credential.chars().count();

    // Length tier.
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    } else {
        feedback.push("Use at least 8 characters".to_string());
    }

    // Character diversity.  The special-character check accepts any
    // non-alphanumeric, not just the fixed symbol set.
    if credential.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        feedback.push("Add lowercase letters".to_string());
    }

    if credential.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        feedback.push("Add uppercase letters".to_string());
    }

    if credential.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        feedback.push("Add numbers".to_string());
    }

    if credential.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    } else {
        feedback.push("Add special characters".to_string());
    }

    // Bonus points.
    if length >= 16 {
        score += 1;
    }
    if symbol_set_regex().is_match(credential) {
        score += 1;
    }

    // Penalty: three or more identical consecutive characters.
    if has_repeated_run(credential) {
        score -= 1;
        feedback.push("Avoid repeating characters".to_string());
    }

    let category = match score {
        i32::MIN..=2 => Strength::VeryWeak,
        3..=4 => Strength::Weak,
        5..=6 => Strength::Fair,
        7 => Strength::Good,
        _ => Strength::Strong,
    };

    StrengthReport {
        score,
        feedback,
        category,
    }
}

/// True when the credential contains three identical characters in a row.
fn has_repeated_run(credential: &str) -> bool {
    let chars: Vec<char> = credential.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_example_is_very_weak() {
        // 8 chars, lowercase only: +1 length, +1 lowercase.
        let report = score("password");
        assert_eq!(report.score, 2);
        assert_eq!(report.category, Strength::VeryWeak);
        assert!(report.feedback.contains(&"Add uppercase letters".to_string()));
        assert!(report.feedback.contains(&"Add numbers".to_string()));
        assert!(report.feedback.contains(&"Add special characters".to_string()));
    }

    #[test]
    fn sixteen_char_four_class_credential_is_strong() {
        // +2 length, +4 diversity, +1 len>=16, +1 symbol set, no runs.
        let report = score("aB3$efGh5jKl9mN!");
        assert_eq!(report.score, 8);
        assert_eq!(report.category, Strength::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn out_of_set_symbol_gets_diversity_but_not_bonus() {
        // '~' is non-alphanumeric but outside the fixed symbol set.
        let report = score("abcdefgH5~xyzWq2");
        assert_eq!(report.score, 7);
        assert_eq!(report.category, Strength::Good);
    }

    #[test]
    fn repeated_run_is_penalized() {
        let with_run = score("aaab8$Xq");
        let without_run = score("acab8$Xq");
        assert_eq!(with_run.score, without_run.score - 1);
        assert!(with_run
            .feedback
            .contains(&"Avoid repeating characters".to_string()));
    }

    #[test]
    fn minimal_input_with_run_scores_zero() {
        // +1 lowercase, -1 repeat run; no floor is applied to the sum.
        let report = score("aaa");
        assert_eq!(report.score, 0);
        assert_eq!(report.category, Strength::VeryWeak);
    }

    #[test]
    fn short_input_gets_length_feedback() {
        let report = score("Ab1!");
        assert!(report
            .feedback
            .contains(&"Use at least 8 characters".to_string()));
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = score("Tr0ub4dor&3");
        let b = score("Tr0ub4dor&3");
        assert_eq!(a.score, b.score);
        assert_eq!(a.category, b.category);
        assert_eq!(a.feedback, b.feedback);
    }

    #[test]
    fn feedback_preserves_rule_order() {
        let report = score("");
        assert_eq!(
            report.feedback,
            vec![
                "Use at least 8 characters",
                "Add lowercase letters",
                "Add uppercase letters",
                "Add numbers",
                "Add special characters",
            ]
        );
    }

    #[test]
    fn unicode_length_counts_scalars() {
        // 12 umlaut characters: +2 length, diversity only from the
        // non-alphanumeric check (accents are alphabetic).
        let report = score("éééééééééééé");
        assert!(report.score >= 2);
    }
}
