/// Something a solver can evaluate at a point, such as a quadratic
/// returning its value and slope at `x`.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns the model's own error; solvers stop and report it.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The point a model was evaluated at and what it returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Records one evaluation.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
