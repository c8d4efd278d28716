use rootscan_core::Observer;
use rootscan_solvers::equation::{multi_start, newton};

use crate::{
    DEFAULT_MAX_ITER, DEFAULT_SEEDS, DERIVATIVE_TOL, Error, Quadratic, ROUND_DIGITS, RootProblem,
    Sample, UNIQUENESS_TOL,
};

/// Outcome of a single Newton-Raphson run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Final estimate.
    pub root: f64,
    /// Iterations consumed (1-based).
    pub iters: usize,
    /// True if the step size fell below the tolerance.
    pub converged: bool,
}

impl<I, O> From<&newton::Solution<I, O>> for Convergence {
    fn from(solution: &newton::Solution<I, O>) -> Self {
        Self {
            root: solution.x,
            iters: solution.iters,
            converged: solution.is_converged(),
        }
    }
}

/// Runs Newton-Raphson on `a·x² + b·x + c` from `x0`.
///
/// Stationary points, exhausted budgets, and iterates that overflow (or a
/// non-finite `x0`) are reported through [`Convergence::converged`], not as
/// errors.
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a` is zero or any coefficient is
/// not finite, and [`Error::InvalidConfig`] if `tol` is negative or not finite.
pub fn newton_raphson(
    a: f64,
    b: f64,
    c: f64,
    x0: f64,
    tol: f64,
    max_iter: usize,
) -> Result<Convergence, Error> {
    let quadratic = Quadratic::new(a, b, c)?;
    let config = newton::Config::new(max_iter, tol, DERIVATIVE_TOL)?;
    newton_raphson_observed(&quadratic, x0, &config, ())
}

/// Runs Newton-Raphson on `quadratic` from `x0`, reporting each iteration to
/// `observer`.
///
/// # Errors
///
/// Returns [`Error::Solver`] if evaluating the quadratic fails.
pub fn newton_raphson_observed<Obs>(
    quadratic: &Quadratic,
    x0: f64,
    config: &newton::Config,
    observer: Obs,
) -> Result<Convergence, Error>
where
    Obs: for<'a> Observer<newton::Event<'a, f64, Sample>, newton::Action>,
{
    let solution = newton::solve(quadratic, &RootProblem, x0, config, observer)?;
    Ok(Convergence::from(&solution))
}

/// Finds the distinct real roots of `a·x² + b·x + c`, sorted ascending.
///
/// An empty result means no seed converged; see the [crate docs](crate).
///
/// # Errors
///
/// Returns [`Error::InvalidCoefficient`] if `a` is zero or any coefficient is
/// not finite, and [`Error::InvalidConfig`] if `tol` is negative or not finite.
pub fn find_roots(a: f64, b: f64, c: f64, tol: f64) -> Result<Vec<f64>, Error> {
    let quadratic = Quadratic::new(a, b, c)?;
    let config = scan_config(tol)?;
    find_roots_observed(&quadratic, &config, ())
}

/// Runs the root scan over [`DEFAULT_SEEDS`], reporting each seed to
/// `observer`.
///
/// # Errors
///
/// Returns [`Error::Scan`] if the scan aborts.
pub fn find_roots_observed<Obs>(
    quadratic: &Quadratic,
    config: &multi_start::Config,
    observer: Obs,
) -> Result<Vec<f64>, Error>
where
    Obs: Observer<multi_start::Event, multi_start::Action>,
{
    let solution = multi_start::solve(quadratic, &RootProblem, &DEFAULT_SEEDS, config, observer)?;
    Ok(solution.roots)
}

/// Builds the root scan config for a step tolerance of `tol`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `tol` is negative or not finite.
pub fn scan_config(tol: f64) -> Result<multi_start::Config, Error> {
    let newton = newton::Config::new(DEFAULT_MAX_ITER, tol, DERIVATIVE_TOL)?;
    Ok(multi_start::Config::new(newton, ROUND_DIGITS, UNIQUENESS_TOL)?)
}
