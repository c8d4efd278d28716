/// Roots accepted so far, kept at least `dedup_tol` apart.
pub(super) struct RootSet {
    roots: Vec<f64>,
    dedup_tol: f64,
}

impl RootSet {
    pub(super) fn new(dedup_tol: f64) -> Self {
        Self {
            roots: Vec::new(),
            dedup_tol,
        }
    }

    /// Accepts `root` unless it lies within `dedup_tol` of an accepted root.
    ///
    /// Returns true if the root was accepted.
    pub(super) fn insert(&mut self, root: f64) -> bool {
        if self
            .roots
            .iter()
            .any(|accepted| (root - accepted).abs() < self.dedup_tol)
        {
            return false;
        }
        self.roots.push(root);
        true
    }

    pub(super) fn into_sorted(mut self) -> Vec<f64> {
        self.roots.sort_by(f64::total_cmp);
        self.roots
    }
}

/// Rounds `x` to `digits` decimal digits, breaking ties toward even.
///
/// Values too large to scale are already coarser than the requested precision
/// and are returned unchanged.
pub(super) fn round_to_digits(x: f64, digits: u8) -> f64 {
    let scale = 10_f64.powi(i32::from(digits));
    let scaled = x * scale;
    if scaled.is_finite() {
        scaled.round_ties_even() / scale
    } else {
        x
    }
}
