use thiserror::Error;

use rootscan_core::{DifferentiableEquationProblem, EquationProblem, Model, Snapshot};

/// The result of evaluating a differentiable equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub jacobian: [[f64; N]; N],
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute residuals or the Jacobian.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of a differentiable equation problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// residuals and the Jacobian from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the residual or
/// Jacobian computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: DifferentiableEquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;
    let jacobian = problem
        .jacobian(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        jacobian,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Model that cubes its input and reports the slope.
    struct Cube;

    impl Model for Cube {
        type Input = f64;
        type Output = (f64, f64);
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<(f64, f64), Self::Error> {
            Ok((x.powi(3), 3.0 * x * x))
        }
    }

    #[derive(Debug, Error)]
    #[error("x must be non-negative, got {0}")]
    struct NegativeInput(f64);

    /// Residual `x³ - 8`, rejecting negative inputs.
    struct CubeEquals8;

    impl EquationProblem<1> for CubeEquals8 {
        type Input = f64;
        type Output = (f64, f64);
        type Error = NegativeInput;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0] < 0.0 {
                return Err(NegativeInput(x[0]));
            }
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &(f64, f64)) -> Result<[f64; 1], Self::Error> {
            Ok([output.0 - 8.0])
        }
    }

    impl DifferentiableEquationProblem<1> for CubeEquals8 {
        fn jacobian(&self, _input: &f64, output: &(f64, f64)) -> Result<[[f64; 1]; 1], Self::Error> {
            Ok([[output.1]])
        }
    }

    #[test]
    fn evaluation_captures_residual_and_slope() {
        let eval = evaluate(&Cube, &CubeEquals8, [3.0]).expect("should evaluate");

        assert_relative_eq!(eval.x[0], 3.0);
        assert_relative_eq!(eval.residuals[0], 19.0);
        assert_relative_eq!(eval.jacobian[0][0], 27.0);
        assert_relative_eq!(eval.snapshot.input, 3.0);
    }

    #[test]
    fn problem_error_is_reported() {
        let result = evaluate(&Cube, &CubeEquals8, [-1.0]);
        assert!(matches!(result, Err(EvalError::Problem(NegativeInput(_)))));
    }
}
