use thiserror::Error;

use crate::equation::newton;

/// Largest rounding precision that still means something for an `f64`.
const MAX_ROUND_DIGITS: u8 = 15;

/// Configuration for the multi-start scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    newton: newton::Config,
    round_digits: u8,
    dedup_tol: f64,
}

/// Errors that can occur when validating a multi-start config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round_digits must be at most 15")]
    RoundDigits,

    #[error("dedup_tol must be finite and non-negative")]
    DedupTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            newton: newton::Config::default(),
            round_digits: 8,
            dedup_tol: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `round_digits` exceeds the precision of an `f64`
    /// or `dedup_tol` is negative or non-finite.
    pub fn new(
        newton: newton::Config,
        round_digits: u8,
        dedup_tol: f64,
    ) -> Result<Self, ConfigError> {
        if round_digits > MAX_ROUND_DIGITS {
            return Err(ConfigError::RoundDigits);
        }
        if !dedup_tol.is_finite() || dedup_tol < 0.0 {
            return Err(ConfigError::DedupTol);
        }

        Ok(Self {
            newton,
            round_digits,
            dedup_tol,
        })
    }

    /// Returns the config used for each seed's Newton-Raphson run.
    #[must_use]
    pub fn newton(&self) -> &newton::Config {
        &self.newton
    }

    /// Returns the number of decimal digits converged roots are rounded to.
    #[must_use]
    pub fn round_digits(&self) -> u8 {
        self.round_digits
    }

    /// Returns the minimum separation between accepted roots.
    #[must_use]
    pub fn dedup_tol(&self) -> f64 {
        self.dedup_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        let config = Config::new(newton::Config::default(), 8, 1e-6).expect("valid config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_values() {
        let newton = newton::Config::default();
        assert_eq!(Config::new(newton, 16, 1e-6), Err(ConfigError::RoundDigits));
        assert_eq!(Config::new(newton, 8, -1e-6), Err(ConfigError::DedupTol));
        assert_eq!(Config::new(newton, 8, f64::NAN), Err(ConfigError::DedupTol));
    }
}
