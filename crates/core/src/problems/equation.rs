/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output. Solvers drive the residuals
/// toward zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// For example, `N = 1` represents a scalar equation `f(x) = 0`.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(&self, input: &Self::Input, output: &Self::Output)
    -> Result<[f64; N], Self::Error>;
}

/// An equation problem that also knows the derivative of its residuals.
///
/// Derivative-based solvers such as Newton-Raphson need the Jacobian
/// `J[i][j] = ∂residual_i / ∂x_j` at each evaluated point. For `N = 1` this is
/// the ordinary derivative `f′(x)`.
pub trait DifferentiableEquationProblem<const N: usize>: EquationProblem<N> {
    /// Computes the Jacobian of the residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn jacobian(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[[f64; N]; N], Self::Error>;
}
