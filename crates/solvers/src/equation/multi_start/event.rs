use crate::equation::newton;

/// Per-seed events emitted by the multi-start scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The run converged to a new root, which was accepted.
    Accepted {
        /// The starting point of the run.
        seed: f64,
        /// The rounded root.
        root: f64,
        /// Newton iterations used.
        iters: usize,
    },

    /// The run converged to a root already accepted from an earlier seed.
    Duplicate {
        /// The starting point of the run.
        seed: f64,
        /// The rounded root that was discarded.
        root: f64,
        /// Newton iterations used.
        iters: usize,
    },

    /// The run stopped without converging.
    NotConverged {
        /// The starting point of the run.
        seed: f64,
        /// Why the run stopped.
        status: newton::Status,
        /// The final estimate.
        x: f64,
        /// Newton iterations used.
        iters: usize,
    },
}

impl Event {
    /// Returns the seed this event reports on.
    #[must_use]
    pub fn seed(&self) -> f64 {
        match self {
            Self::Accepted { seed, .. }
            | Self::Duplicate { seed, .. }
            | Self::NotConverged { seed, .. } => *seed,
        }
    }
}
