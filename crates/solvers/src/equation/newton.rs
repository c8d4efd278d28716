//! Newton-Raphson iteration for single-variable equations.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates the residual `f(x)` and its
//! derivative `f′(x)`, then steps to `x − f(x) / f′(x)`. The solver converges
//! when a step moves `x` by less than [`Config::x_tol`].
//!
//! # Stopping Conditions
//!
//! - [`Status::Converged`] — the step size fell below the tolerance; the
//!   reported `x` is the post-step estimate
//! - [`Status::DerivativeTooSmall`] — `|f′(x)|` fell below
//!   [`Config::derivative_tol`], so the step would blow up
//! - [`Status::MaxIters`] — the iteration budget ran out
//! - [`Status::NonFinite`] — the residual, derivative, or Newton update left
//!   the finite range (including a non-finite `x0`); the reported `x` is the
//!   last estimate evaluated
//! - [`Status::StoppedByObserver`] — an observer returned [`Action::StopEarly`]
//!
//! None of these are errors. Errors are reserved for failures from the model
//! or problem.
//!
//! # Limitations
//!
//! - **No global convergence**: the result depends on `x0`; a poor start can
//!   wander or stall at a stationary point
//! - **Single variable only**: Works with [`DifferentiableEquationProblem<1>`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating the current
//! estimate and before taking the step.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootscan_core::{DifferentiableEquationProblem, Model, Observer};

use crate::equation::evaluate;

/// Finds a root of the equation using Newton-Raphson iteration from `x0`.
///
/// The observer receives an [`Event`] for each iteration.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableEquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let eval = evaluate(model, problem, [x])?;
        let residual = eval.residuals[0];
        let derivative = eval.jacobian[0][0];

        if !residual.is_finite() || !derivative.is_finite() {
            return Ok(Solution::from_eval(eval, Status::NonFinite, iter));
        }

        let event = Event::new(iter, &eval);
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if derivative.abs() < config.derivative_tol() {
            return Ok(Solution::from_eval(eval, Status::DerivativeTooSmall, iter));
        }

        let x_new = x - residual / derivative;
        if !x_new.is_finite() {
            return Ok(Solution::from_eval(eval, Status::NonFinite, iter));
        }

        if (x_new - x).abs() < config.x_tol() {
            let eval = evaluate(model, problem, [x_new])?;
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        x = x_new;
    }

    let eval = evaluate(model, problem, [x])?;
    Ok(Solution::from_eval(eval, Status::MaxIters, config.max_iters()))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableEquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}
