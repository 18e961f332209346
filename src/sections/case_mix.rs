//! Case-mix section - requires both ASCII uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};

use crate::types::Rule;

use super::SectionResult;

pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        None
    } else {
        Some(Rule::CaseMix.message().to_string())
    }
}
