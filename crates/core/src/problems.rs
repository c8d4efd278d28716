pub mod equation;

pub use equation::{DifferentiableEquationProblem, EquationProblem};
