use crate::equation::Evaluation;

/// Iteration event emitted by the Newton-Raphson solver.
///
/// Emitted after evaluating the current estimate and before stepping.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    iter: usize,
    eval: &'a Evaluation<I, O, 1>,
}

impl<'a, I, O> Event<'a, I, O> {
    pub(super) fn new(iter: usize, eval: &'a Evaluation<I, O, 1>) -> Self {
        Self { iter, eval }
    }

    /// Iteration counter (1-based).
    #[must_use]
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// The current estimate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// The residual `f(x)` at the current estimate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }

    /// The derivative `f′(x)` at the current estimate.
    #[must_use]
    pub fn derivative(&self) -> f64 {
        self.eval.jacobian[0][0]
    }

    /// The full evaluation at the current estimate.
    #[must_use]
    pub fn eval(&self) -> &'a Evaluation<I, O, 1> {
        self.eval
    }
}
