//! Password composition scoring and strong password generation
//!
//! A candidate is scored against four rules (length, case mix, digit,
//! special character), one point each. Known common passwords are rejected
//! outright with a score of 0.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to an extra common-password file
//!   (default: `./assets/common-passwords.txt`)
//! - `PWD_GENERATOR_MAX_ATTEMPTS`: Attempt cap read by
//!   [`GeneratorConfig::from_env`] (`0` disables the cap)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, generate_strong, PasswordStrength};
//! use secrecy::ExposeSecret;
//!
//! let report = evaluate("Abcdef12");
//! assert_eq!(report.score, 3);
//! assert_eq!(report.strength(), PasswordStrength::Moderate);
//! for message in &report.messages {
//!     println!("{message}");
//! }
//!
//! let suggestion = generate_strong().expect("generation failed");
//! assert_eq!(evaluate(suggestion.expose_secret()).score, 4);
//! ```

// Internal modules
mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{
    BUILTIN_COMMON_PASSWORDS, BlacklistError, get_blacklist, get_blacklist_path, init_blacklist,
    init_blacklist_from_path, is_blacklisted,
};
pub use charset::SPECIAL_CHARACTERS;
pub use evaluator::{SaveError, evaluate, evaluate_password_strength, validate_for_save};
pub use generator::{
    DEFAULT_MAX_ATTEMPTS, GENERATED_LENGTH, GeneratorConfig, GeneratorError, MAX_GENERATED_LENGTH,
    generate_strong, generate_strong_with,
};
pub use types::{COMMON_PASSWORD_WARNING, MIN_LENGTH, PasswordStrength, Rule, ScoreReport};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
