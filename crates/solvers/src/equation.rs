//! Solvers for equation problems — finding roots of scalar equations.
//!
//! A [`DifferentiableEquationProblem`] maps solver variables `x: [f64; N]` to
//! model inputs, calls the model, and computes residuals and their derivatives.
//! Solvers in this module drive those residuals toward zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson iteration from a single starting point
//! - [`multi_start`] — runs [`newton`] from a list of seeds and collects the
//!   distinct roots it converges to
//!
//! [`DifferentiableEquationProblem`]: rootscan_core::DifferentiableEquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod multi_start;
pub mod newton;
