use std::convert::Infallible;

use rootscan_core::{DifferentiableEquationProblem, EquationProblem};

use crate::Sample;

/// Drives a [`Quadratic`](crate::Quadratic) to zero.
///
/// The solver variable is `x` itself, the residual is `f(x)`, and the
/// derivative is `f′(x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootProblem;

impl EquationProblem<1> for RootProblem {
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &Sample) -> Result<[f64; 1], Self::Error> {
        Ok([output.value])
    }
}

impl DifferentiableEquationProblem<1> for RootProblem {
    fn jacobian(&self, _input: &f64, output: &Sample) -> Result<[[f64; 1]; 1], Self::Error> {
        Ok([[output.slope]])
    }
}
