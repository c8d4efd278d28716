/// Indicates whether every seed was tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every seed was tried.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a multi-start scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Distinct roots, sorted ascending.
    pub roots: Vec<f64>,

    /// Final scan status.
    pub status: Status,

    /// Number of seeds the scan ran Newton-Raphson from.
    pub seeds_tried: usize,
}
