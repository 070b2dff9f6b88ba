//! Password strength scoring.
//!
//! A six-boost additive scorer driving the live strength meter on the
//! sign-up page. Pure and cheap — called on every keystroke.

use crate::validation::{has_digit, has_lowercase, has_special, has_uppercase};

/// Discrete strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    /// Nothing satisfied (empty or all-miss input).
    None,
    /// Score 1–2.
    Weak,
    /// Score 3.
    Fair,
    /// Score 4.
    Good,
    /// Score 5–6.
    Strong,
}

impl StrengthLabel {
    /// Label text for the meter; empty for `None`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Meter color hint; empty for `None`.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "#ef4444",
            Self::Fair => "#f97316",
            Self::Good => "#eab308",
            Self::Strong => "#22c55e",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored password strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    /// 0–6: one point per satisfied boost.
    pub score: u8,
    /// Tier label for the score.
    pub label: StrengthLabel,
}

impl PasswordStrength {
    /// Meter color hint for this strength.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.label.color()
    }
}

/// Score a password.
///
/// Six independent boosts, one point each: length ≥ 8, length ≥ 12,
/// uppercase, lowercase, digit, special character. Satisfying an
/// additional boost can never lower the score, so the meter only ever
/// moves forward as the password improves.
#[must_use]
pub fn score(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let boosts = [
        length >= 8,
        length >= 12,
        has_uppercase(password),
        has_lowercase(password),
        has_digit(password),
        has_special(password),
    ];
    #[allow(clippy::cast_possible_truncation)] // at most 6 boosts
    let score = boosts.iter().filter(|&&boost| boost).count() as u8;

    let label = match score {
        0 => StrengthLabel::None,
        1 | 2 => StrengthLabel::Weak,
        3 => StrengthLabel::Fair,
        4 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    };

    PasswordStrength { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_password_scores_none() {
        let strength = score("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::None);
        assert_eq!(strength.color(), "");
    }

    #[test]
    fn tier_thresholds() {
        // lowercase only: 1 boost
        assert_eq!(score("abc").label, StrengthLabel::Weak);
        // length + lowercase: 2 boosts
        assert_eq!(score("abcdefgh").label, StrengthLabel::Weak);
        // length + upper + lower: 3 boosts
        assert_eq!(score("Abcdefgh").label, StrengthLabel::Fair);
        // length + upper + lower + digit: 4 boosts
        assert_eq!(score("Abcdefg1").label, StrengthLabel::Good);
        // + special: 5 boosts
        assert_eq!(score("Abcdefg1!").label, StrengthLabel::Strong);
        // + length 12: all 6 boosts
        let all = score("Abcdefghij1!");
        assert_eq!(all.score, 6);
        assert_eq!(all.label, StrengthLabel::Strong);
    }

    #[test]
    fn colors_match_labels() {
        assert_eq!(score("abc").color(), "#ef4444");
        assert_eq!(score("Abcdefgh").color(), "#f97316");
        assert_eq!(score("Abcdefg1").color(), "#eab308");
        assert_eq!(score("Abcdefg1!").color(), "#22c55e");
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_classes() {
        // No [A-Z]/[a-z]/[0-9]/special match, shorter than 8
        let strength = score("ñññ");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::None);
    }

    proptest! {
        // Appending characters can only add boosts (length grows, class
        // presence is preserved), so the score is monotonic under growth.
        #[test]
        fn score_is_monotonic_under_appending(password in ".{0,16}", suffix in ".{1,8}") {
            let before = score(&password).score;
            let after = score(&format!("{password}{suffix}")).score;
            prop_assert!(after >= before);
        }

        #[test]
        fn score_never_exceeds_six(password in ".{0,64}") {
            prop_assert!(score(&password).score <= 6);
        }
    }
}
