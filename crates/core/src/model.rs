/// A callable that maps a typed input to a typed output.
///
/// Models are the unit that solvers evaluate. A population model, for
/// instance, takes the current census and returns the instantaneous growth
/// rates of each species.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model for the given input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a single model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a snapshot from an input and the output it produced.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Doubler;

    impl Model for Doubler {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(2.0 * input)
        }
    }

    #[test]
    fn snapshot_captures_call() {
        let input = 3.5;
        let output = Doubler.call(&input).unwrap();

        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot, Snapshot { input: 3.5, output: 7.0 });
    }
}
