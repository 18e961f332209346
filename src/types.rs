//! Result types produced by the scorer.

use std::fmt;

/// Minimum candidate length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Shown alongside a common-password report instead of rule feedback.
pub const COMMON_PASSWORD_WARNING: &str =
    "This password is too common. Please choose a stronger one.";

/// One of the four independent composition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    CaseMix,
    Digit,
    Special,
}

impl Rule {
    /// All rules, in the order their feedback is reported.
    pub const ALL: [Rule; 4] = [Rule::Length, Rule::CaseMix, Rule::Digit, Rule::Special];

    /// Feedback shown when the rule is not met.
    pub fn message(self) -> &'static str {
        match self {
            Rule::Length => "Password must be at least 8 characters long.",
            Rule::CaseMix => "Include both uppercase and lowercase letters.",
            Rule::Digit => "Add at least one number (0-9).",
            Rule::Special => "Include at least one special character (!@#$%^&*).",
        }
    }
}

/// Strength label derived from a [`ScoreReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreReport {
    /// Number of passed rules, 0 to 4. Forced to 0 for common passwords.
    pub score: u8,
    /// One message per failed rule, in [`Rule::ALL`] order.
    pub messages: Vec<String>,
    /// Set when the candidate matched the common-password list.
    pub common: bool,
}

impl ScoreReport {
    pub const MAX_SCORE: u8 = Rule::ALL.len() as u8;

    pub(crate) fn common_password() -> Self {
        Self {
            score: 0,
            messages: Vec::new(),
            common: true,
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        if self.common {
            return PasswordStrength::Weak;
        }
        match self.score {
            s if s >= Self::MAX_SCORE => PasswordStrength::Strong,
            3 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }

    /// Dedicated warning for the common-password case.
    pub fn warning(&self) -> Option<&'static str> {
        self.common.then_some(COMMON_PASSWORD_WARNING)
    }

    pub fn is_strong(&self) -> bool {
        self.strength() == PasswordStrength::Strong
    }
}
