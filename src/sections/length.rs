//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{MIN_LENGTH, Rule};

use super::SectionResult;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Rule::Length.message().to_string());
    }
    None
}
