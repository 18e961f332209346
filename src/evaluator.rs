//! Password scorer - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{RULE_SECTIONS, blacklist_section};
use crate::types::ScoreReport;

/// Delay before an async evaluation runs, so rapid re-triggers can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates a password against the composition rules.
///
/// A common password short-circuits: score 0, no messages, `common` set.
/// Otherwise each passed rule adds one point and each failed rule adds its
/// message, in rule order.
pub fn evaluate_password_strength(password: &SecretString) -> ScoreReport {
    if blacklist_section(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("candidate rejected by common password list");
        return ScoreReport::common_password();
    }

    let mut score = 0u8;
    let mut messages = Vec::new();

    for (_rule, section) in RULE_SECTIONS {
        match section(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("rule {:?} failed", _rule);
                messages.push(reason);
            }
            None => score += 1,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "evaluated candidate of {} chars: score {}",
        password.expose_secret().chars().count(),
        score
    );

    ScoreReport {
        score,
        messages,
        common: false,
    }
}

/// Convenience wrapper over [`evaluate_password_strength`] for plain strings.
pub fn evaluate(candidate: &str) -> ScoreReport {
    let password = SecretString::new(candidate.into());
    evaluate_password_strength(&password)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SaveError {
    #[error("Please enter a password to save")]
    Empty,
    #[error("This password is too common. Please choose a stronger one.")]
    Common,
    #[error("Strengthen your password before saving (score {score}/4)")]
    TooWeak { score: u8, messages: Vec<String> },
}

/// Re-validates a password before the caller accepts it.
///
/// Only a non-common password passing all four rules is accepted.
pub fn validate_for_save(password: &SecretString) -> Result<ScoreReport, SaveError> {
    if password.expose_secret().is_empty() {
        return Err(SaveError::Empty);
    }

    let report = evaluate_password_strength(password);
    if report.common {
        return Err(SaveError::Common);
    }
    if !report.is_strong() {
        #[cfg(feature = "tracing")]
        tracing::warn!("save rejected: score {}", report.score);
        return Err(SaveError::TooWeak {
            score: report.score,
            messages: report.messages,
        });
    }
    Ok(report)
}

/// Async version that debounces, then sends the report via channel.
///
/// If `token` is cancelled before the debounce elapses nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let report = evaluate_password_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::blacklist::{
        BUILTIN_COMMON_PASSWORDS, init_blacklist_from_path, reset_blacklist_for_testing,
    };
    use crate::types::{PasswordStrength, Rule};
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn messages(rules: &[Rule]) -> Vec<String> {
        rules.iter().map(|r| r.message().to_string()).collect()
    }

    #[test]
    fn test_evaluate_common_password() {
        let report = evaluate("password");
        assert_eq!(report.score, 0);
        assert!(report.messages.is_empty());
        assert!(report.common);
        assert_eq!(report.strength(), PasswordStrength::Weak);
        assert!(report.warning().is_some());
    }

    #[test]
    fn test_evaluate_common_passwords_any_case() {
        for pwd in BUILTIN_COMMON_PASSWORDS {
            for variant in [pwd.to_string(), pwd.to_uppercase()] {
                let report = evaluate(&variant);
                assert_eq!(report.score, 0, "{variant}");
                assert!(report.messages.is_empty(), "{variant}");
                assert!(report.common, "{variant}");
            }
        }
    }

    #[test]
    #[serial]
    fn test_evaluate_entry_loaded_from_file() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Dragon!2024X").expect("Failed to write");

        // Scores 4 on the rules alone.
        assert_eq!(evaluate("Dragon!2024X").score, 4);

        init_blacklist_from_path(temp_file.path()).expect("init should succeed");
        for candidate in ["Dragon!2024X", "dragon!2024x"] {
            assert_eq!(
                evaluate(candidate),
                ScoreReport {
                    score: 0,
                    messages: Vec::new(),
                    common: true,
                }
            );
        }

        reset_blacklist_for_testing();
    }

    #[test]
    fn test_evaluate_lowercase_only_short() {
        let report = evaluate("abcdefg");
        assert_eq!(report.score, 0);
        assert_eq!(
            report.messages,
            messages(&[Rule::Length, Rule::CaseMix, Rule::Digit, Rule::Special])
        );
        assert!(!report.common);
        assert_eq!(report.warning(), None);
    }

    #[test]
    fn test_evaluate_missing_special() {
        let report = evaluate("Abcdef12");
        assert_eq!(report.score, 3);
        assert_eq!(report.messages, messages(&[Rule::Special]));
        assert_eq!(report.strength(), PasswordStrength::Moderate);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let report = evaluate("Abcdef12!");
        assert_eq!(report.score, 4);
        assert!(report.messages.is_empty());
        assert_eq!(report.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(report.messages.len(), 4);
        assert!(!report.common);
    }

    #[test]
    fn test_score_counts_passed_rules() {
        let cases: [(&str, &[Rule]); 6] = [
            ("A", &[Rule::Length, Rule::CaseMix, Rule::Digit, Rule::Special]),
            ("aaaaaaaa", &[Rule::CaseMix, Rule::Digit, Rule::Special]),
            ("aB3", &[Rule::Length, Rule::Special]),
            ("!!!!!!!!9", &[Rule::CaseMix]),
            ("Xy!", &[Rule::Length, Rule::Digit]),
            ("ZZZZzzzz!!", &[Rule::Digit]),
        ];

        for (candidate, failed) in cases {
            let report = evaluate(candidate);
            assert_eq!(report.messages, messages(failed), "{candidate}");
            assert_eq!(
                report.score as usize,
                Rule::ALL.len() - failed.len(),
                "{candidate}"
            );
        }
    }

    #[test]
    fn test_secret_and_plain_entry_points_agree() {
        let pwd = SecretString::new("MyPass123".to_string().into());
        assert_eq!(evaluate_password_strength(&pwd), evaluate("MyPass123"));
    }

    #[test]
    fn test_validate_for_save() {
        let strong = SecretString::new("Abcdef12!".to_string().into());
        assert_eq!(validate_for_save(&strong).map(|r| r.score), Ok(4));

        let empty = SecretString::new("".to_string().into());
        assert_eq!(validate_for_save(&empty), Err(SaveError::Empty));

        let common = SecretString::new("Admin".to_string().into());
        assert_eq!(validate_for_save(&common), Err(SaveError::Common));

        let moderate = SecretString::new("Abcdef12".to_string().into());
        assert_eq!(
            validate_for_save(&moderate),
            Err(SaveError::TooWeak {
                score: 3,
                messages: messages(&[Rule::Special]),
            })
        );
    }
}
