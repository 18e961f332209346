//! Blacklist section - checks if password is in the common password list.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password is a known common password.
///
/// Unlike the rule sections this one short-circuits evaluation, so it
/// reports a flag instead of a reason.
pub fn blacklist_section(password: &SecretString) -> bool {
    is_blacklisted(password.expose_secret())
}
