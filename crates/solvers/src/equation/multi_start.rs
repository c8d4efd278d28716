//! Multi-start root scan built on [`newton`].
//!
//! # Algorithm
//!
//! Runs Newton-Raphson from each seed in order. Each converged estimate is
//! rounded to [`Config::round_digits`] decimal digits and accepted only if it
//! is at least [`Config::dedup_tol`] away from every root already accepted.
//! The accepted roots are returned sorted ascending.
//!
//! # Failure Handling
//!
//! Seeds whose run stops without converging (any [`newton::Status`] other
//! than [`newton::Status::Converged`], including a non-finite iteration) are
//! skipped. Model and problem errors are not seed-specific and abort the scan
//! with [`Error::Seed`].
//!
//! # Limitations
//!
//! The scan is best-effort. Nothing guarantees that every real root is
//! reached from the given seeds.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per seed. Observers can return
//! [`Action::StopEarly`] to skip the remaining seeds.

mod action;
mod config;
mod error;
mod event;
mod roots;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootscan_core::{DifferentiableEquationProblem, Model, Observer};

use crate::equation::newton;

use roots::{RootSet, round_to_digits};

/// Collects the distinct roots reached by Newton-Raphson from each seed.
///
/// The observer receives an [`Event`] for each seed.
///
/// # Errors
///
/// Returns an error if the model or problem fails during any seed's run.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    seeds: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: DifferentiableEquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event, Action>,
{
    let mut roots = RootSet::new(config.dedup_tol());

    for (index, &seed) in seeds.iter().enumerate() {
        let solution = newton::solve_unobserved(model, problem, seed, config.newton())
            .map_err(|source| Error::Seed { seed, source })?;

        let event = if solution.is_converged() {
            let root = round_to_digits(solution.x, config.round_digits());
            let iters = solution.iters;
            if roots.insert(root) {
                Event::Accepted { seed, root, iters }
            } else {
                Event::Duplicate { seed, root, iters }
            }
        } else {
            Event::NotConverged {
                seed,
                status: solution.status,
                x: solution.x,
                iters: solution.iters,
            }
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                roots: roots.into_sorted(),
                status: Status::StoppedByObserver,
                seeds_tried: index + 1,
            });
        }
    }

    Ok(Solution {
        roots: roots.into_sorted(),
        status: Status::Completed,
        seeds_tried: seeds.len(),
    })
}

/// Runs the multi-start scan without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails during any seed's run.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    seeds: &[f64],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: DifferentiableEquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, seeds, config, ())
}
