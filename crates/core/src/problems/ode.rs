use crate::{DerivativeOf, StepIntegrable};

/// Adapts a [`Model`] to a fixed-step ODE solver.
///
/// The solver only knows how to step a [`StepIntegrable`] state. The problem
/// tells it where that state lives in a model input, which part of the model
/// output is its rate of change, and how to assemble the next input once the
/// state has moved.
///
/// [`Model`]: crate::Model
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the integrated state out of a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input holds no usable state.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Returns the rate of change of the state at `input`, given the model's
    /// `output` there.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no derivative can be formed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Assembles the input for the next model call.
    ///
    /// `base` is the input the step started from, so anything that is not
    /// part of the integrated state (a step counter, the clock) can be
    /// carried forward. `delta` is the step just taken.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no valid input exists for `state`.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
