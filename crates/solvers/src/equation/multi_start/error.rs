use thiserror::Error;

use crate::equation::newton;

/// Errors that abort a multi-start scan.
#[derive(Debug, Error)]
pub enum Error {
    #[error("solve from seed {seed} failed")]
    Seed {
        seed: f64,
        #[source]
        source: newton::Error,
    },
}
