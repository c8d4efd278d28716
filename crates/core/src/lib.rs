//! Core traits and types for the Rootscan framework.
//!
//! This crate defines the shared abstractions that solvers and domain models
//! build on:
//!
//! - [`Model`] — something a solver evaluates at a point
//! - [`Snapshot`] — the point a model was evaluated at and its result
//! - [`Observer`] — per-iteration or per-seed hook that can stop a run early
//! - [`EquationProblem`], [`DifferentiableEquationProblem`] — problem traits
//!   that adapt solver variables to model inputs and compute residuals (and
//!   their derivatives) from outputs

mod model;
mod observer;
mod problems;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::{DifferentiableEquationProblem, EquationProblem};
