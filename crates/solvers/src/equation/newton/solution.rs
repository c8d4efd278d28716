use rootscan_core::Snapshot;

use crate::equation::Evaluation;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A Newton step fell below the configured tolerance.
    Converged,

    /// The derivative vanished at the current estimate.
    DerivativeTooSmall,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The iteration left the finite range.
    NonFinite,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Final estimate of the root.
    pub x: f64,

    /// Residual at the reported estimate.
    pub residual: f64,

    /// Snapshot at the reported estimate.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(eval: Evaluation<I, O, 1>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
        }
    }

    /// Returns true if the solver met its step-size tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
