//! Real roots of `a·x² + b·x + c = 0` by Newton-Raphson.
//!
//! [`find_roots`] runs Newton-Raphson from each of [`DEFAULT_SEEDS`], rounds
//! the converged estimates, drops near-duplicates, and returns the distinct
//! roots sorted ascending. An empty result is a valid outcome: there may be no
//! real roots, or no seed may have converged.
//!
//! The scan is best-effort. It does not solve the quadratic formula and makes
//! no promise to find every real root.
//!
//! ```
//! let roots = rootscan_quadratic::find_roots(1.0, 0.0, -4.0, 1e-8).unwrap();
//! assert_eq!(roots, vec![-2.0, 2.0]);
//! ```

mod error;
mod problem;
mod quadratic;
mod solve;

pub use error::Error;
pub use problem::RootProblem;
pub use quadratic::{Quadratic, Sample};
pub use solve::{
    Convergence, find_roots, find_roots_observed, newton_raphson, newton_raphson_observed,
    scan_config,
};

/// Starting points for the root scan, spread over several orders of magnitude.
pub const DEFAULT_SEEDS: [f64; 7] = [-100.0, -10.0, -1.0, 0.0, 1.0, 10.0, 100.0];

/// Step size below which a Newton run counts as converged.
pub const DEFAULT_TOL: f64 = 1e-8;

/// Newton iteration budget per seed.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Slope magnitude below which a Newton step is refused.
pub const DERIVATIVE_TOL: f64 = 1e-12;

/// Decimal digits converged roots are rounded to before deduplication.
pub const ROUND_DIGITS: u8 = 8;

/// Minimum separation between two reported roots.
pub const UNIQUENESS_TOL: f64 = 1e-6;
