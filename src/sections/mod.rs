//! Password evaluation sections
//!
//! Each section checks one composition rule.

mod blacklist;
mod case_mix;
mod digit;
mod length;
mod special;

pub use blacklist::blacklist_section;
pub use case_mix::case_mix_section;
pub use digit::digit_section;
pub use length::length_section;
pub use special::special_character_section;

use crate::types::Rule;
use secrecy::SecretString;

/// Result type for rule sections.
/// - `Some(reason)` - Rule failed with reason
/// - `None` - Rule passed
pub type SectionResult = Option<String>;

pub type Section = fn(&SecretString) -> SectionResult;

/// Rule sections in reporting order.
pub const RULE_SECTIONS: [(Rule, Section); 4] = [
    (Rule::Length, length_section),
    (Rule::CaseMix, case_mix_section),
    (Rule::Digit, digit_section),
    (Rule::Special, special_character_section),
];
