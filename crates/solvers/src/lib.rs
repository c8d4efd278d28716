//! Numerical solvers for the Rootscan framework.
//!
//! # Modules
//!
//! - [`equation`] — solvers that drive the residuals of an
//!   [`EquationProblem`] toward zero
//!
//! [`EquationProblem`]: rootscan_core::EquationProblem

pub mod equation;
