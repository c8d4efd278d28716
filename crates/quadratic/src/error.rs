use thiserror::Error;

use rootscan_solvers::equation::{multi_start, newton};

/// Errors returned by the quadratic root finders.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid coefficient '{name}' = {value}: {reason}")]
    InvalidCoefficient {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid solver config: {0}")]
    InvalidConfig(#[from] newton::ConfigError),

    #[error("invalid scan config: {0}")]
    InvalidScanConfig(#[from] multi_start::ConfigError),

    #[error("newton solve failed")]
    Solver(#[from] newton::Error),

    #[error("root scan failed")]
    Scan(#[from] multi_start::Error),
}
