//! Strong password generator.
//!
//! Draws candidates uniformly from the 70-symbol pool and keeps the
//! first one the scorer rates at the maximum score.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::POOL;
use crate::evaluator::evaluate_password_strength;
use crate::types::{MIN_LENGTH, ScoreReport};

pub const GENERATED_LENGTH: usize = 12;
pub const MAX_GENERATED_LENGTH: usize = 128;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Failed to generate a strong password after {0} attempts")]
    AttemptsExhausted(usize),
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    /// Maximum number of candidates to draw. `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: GENERATED_LENGTH,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl GeneratorConfig {
    /// Builds the default config, overriding the attempt cap from
    /// `PWD_GENERATOR_MAX_ATTEMPTS` when set (`0` disables the cap).
    pub fn from_env() -> Result<Self, GeneratorError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("PWD_GENERATOR_MAX_ATTEMPTS") {
            let attempts: usize = raw.trim().parse().map_err(|_| {
                GeneratorError::InvalidConfig(format!(
                    "PWD_GENERATOR_MAX_ATTEMPTS must be a non-negative integer, got {raw:?}"
                ))
            })?;
            config.max_attempts = (attempts > 0).then_some(attempts);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.length < MIN_LENGTH {
            return Err(GeneratorError::InvalidConfig(format!(
                "length {} is below the minimum of {}",
                self.length, MIN_LENGTH
            )));
        }
        if self.length > MAX_GENERATED_LENGTH {
            return Err(GeneratorError::InvalidConfig(format!(
                "length {} exceeds the maximum of {}",
                self.length, MAX_GENERATED_LENGTH
            )));
        }
        if self.max_attempts == Some(0) {
            return Err(GeneratorError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn draw_candidate<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| POOL[rng.random_range(0..POOL.len())] as char)
        .collect()
}

/// Generates a candidate of `config.length` characters scoring
/// [`ScoreReport::MAX_SCORE`], drawing from `rng`.
pub fn generate_strong_with<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    config.validate()?;

    let mut attempts = 0usize;
    loop {
        if let Some(max) = config.max_attempts {
            if attempts >= max {
                #[cfg(feature = "tracing")]
                tracing::error!("password generation gave up after {} attempts", max);
                return Err(GeneratorError::AttemptsExhausted(max));
            }
        }
        attempts += 1;

        let candidate = SecretString::new(draw_candidate(rng, config.length).into());
        if evaluate_password_strength(&candidate).score == ScoreReport::MAX_SCORE {
            #[cfg(feature = "tracing")]
            tracing::debug!("strong password generated in {} attempt(s)", attempts);
            return Ok(candidate);
        }
    }
}

/// Generates a 12-character password that passes every rule.
pub fn generate_strong() -> Result<SecretString, GeneratorError> {
    generate_strong_with(&GeneratorConfig::default(), &mut rand::rng())
}
