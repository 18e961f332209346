//! Special character section - requires one of `!@#$%^&*`.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::is_special;
use crate::types::Rule;

use super::SectionResult;

pub fn special_character_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(is_special) {
        return None;
    }
    Some(Rule::Special.message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_section_missing_special() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        assert!(special_character_section(&pwd).is_some());
    }

    #[test]
    fn test_special_section_other_punctuation_does_not_count() {
        let pwd = SecretString::new("Abc-def_(1).?".to_string().into());
        assert!(special_character_section(&pwd).is_some());
    }

    #[test]
    fn test_special_section_each_allowed_symbol() {
        for symbol in "!@#$%^&*".chars() {
            let pwd = SecretString::new(format!("Abc{symbol}").into());
            assert_eq!(special_character_section(&pwd), None, "{symbol}");
        }
    }
}
