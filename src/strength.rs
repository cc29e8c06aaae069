//! Password strength scoring - maps rule outcomes to a score and tier.

use std::fmt;

use secrecy::SecretString;

use crate::rules::{RuleReport, evaluate_rules};

/// Password strength score in the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// Creates a score, capped at 100.
    pub fn new(value: u8) -> Self {
        Score(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Strength tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Maps a score onto its tier. Thresholds are 80/60/40; anything
    /// below 40 is weak.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            80..=100 => Strength::Strong,
            60..=79 => Strength::Good,
            40..=59 => Strength::Fair,
            _ => Strength::Weak,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        }
    }

    /// Lowercase tier name, used by the UI as a style-class suffix.
    pub fn tier(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Good => "good",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring a password against the fixed rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    score: Score,
    rules: RuleReport,
}

impl StrengthReport {
    pub fn score(&self) -> Score {
        self.score
    }

    /// Tier for the current score.
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }

    /// Per-rule outcomes, for requirement hint lists.
    pub fn rules(&self) -> &RuleReport {
        &self.rules
    }
}

impl fmt::Display for StrengthReport {
    /// The label shown next to the strength meter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strength: {}", self.strength())
    }
}

/// Evaluates password strength and returns a detailed report.
///
/// The score is the rounded percentage of satisfied rules, so with the
/// fixed five-rule set it always lands on a multiple of 20. Deterministic;
/// same input always yields the same output.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let rules = evaluate_rules(password);
    let satisfied = rules.satisfied_count();
    let score = ((satisfied as f64 / RuleReport::total() as f64) * 100.0).round() as u8;

    StrengthReport {
        score: Score::new(score),
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength_of(password: &str) -> StrengthReport {
        let pwd = SecretString::new(password.to_string().into());
        evaluate_password_strength(&pwd)
    }

    #[test]
    fn test_empty_password_scores_zero() {
        let report = strength_of("");
        assert_eq!(report.score().value(), 0);
        assert_eq!(report.strength(), Strength::Weak);
    }

    #[test]
    fn test_all_rules_satisfied_scores_full() {
        let report = strength_of("Abc12345!");
        assert_eq!(report.score().value(), 100);
        assert_eq!(report.strength(), Strength::Strong);
    }

    #[test]
    fn test_score_is_multiple_of_rule_weight() {
        let samples = [
            "",
            "a",
            "aaaaaaaa",
            "short1",
            "NoNumbers!",
            "MyPass123!",
            "Abc12345!",
            "correct horse battery staple",
        ];

        for pwd in samples {
            let score = strength_of(pwd).score().value();
            assert!(score <= 100, "Score {} out of bounds for '{}'", score, pwd);
            assert_eq!(score % 20, 0, "Unexpected score {} for '{}'", score, pwd);
        }
    }

    #[test]
    fn test_tier_thresholds() {
        // Two rules: length + lowercase.
        let fair = strength_of("aaaaaaaa");
        assert_eq!(fair.score().value(), 40);
        assert_eq!(fair.strength(), Strength::Fair);

        // Three rules: length + lowercase + digit.
        let good = strength_of("aaaaaaa1");
        assert_eq!(good.score().value(), 60);
        assert_eq!(good.strength(), Strength::Good);

        // Four rules: length + upper + lowercase + digit.
        let strong = strength_of("Aaaaaaa1");
        assert_eq!(strong.score().value(), 80);
        assert_eq!(strong.strength(), Strength::Strong);

        // One rule: lowercase only.
        let weak = strength_of("abc");
        assert_eq!(weak.score().value(), 20);
        assert_eq!(weak.strength(), Strength::Weak);
    }

    #[test]
    fn test_short_varied_password_scores_high() {
        // All four character classes without the length rule.
        let report = strength_of("Ab1!");
        assert_eq!(report.score().value(), 80);
        assert_eq!(report.strength(), Strength::Strong);
    }

    #[test]
    fn test_tier_and_label_strings() {
        assert_eq!(Strength::Weak.tier(), "weak");
        assert_eq!(Strength::Strong.label(), "Strong");
        assert_eq!(strength_of("aaaaaaaa").to_string(), "Strength: Fair");
    }

    #[test]
    fn test_report_exposes_rule_outcomes() {
        use crate::rules::RuleId;

        let report = strength_of("NoNumbers!");
        assert!(report.rules().is_satisfied(RuleId::Length));
        assert!(report.rules().is_satisfied(RuleId::Symbol));
        assert!(!report.rules().is_satisfied(RuleId::Number));
    }
}
