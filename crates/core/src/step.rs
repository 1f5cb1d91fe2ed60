/// A type that can be stepped forward using its derivative.
///
/// Implementing this trait lets the Euler solver advance the type via
/// `self + derivative * delta`, where the derivative is taken with respect to
/// `Delta`. For the population models `Delta` is time as a plain `f64`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// Shorthand for `<T as StepIntegrable<Delta>>::Derivative`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Herd(f64);
    struct Births(f64);

    impl StepIntegrable<f64> for Herd {
        type Derivative = Births;

        fn step(&self, derivative: Births, delta: f64) -> Self {
            Herd(self.0 + derivative.0 * delta)
        }
    }

    #[derive(Debug, PartialEq)]
    struct Pair([f64; 2]);
    struct PairRate([f64; 2]);

    impl StepIntegrable<f64> for Pair {
        type Derivative = PairRate;

        fn step(&self, derivative: PairRate, delta: f64) -> Self {
            Pair([
                self.0[0] + derivative.0[0] * delta,
                self.0[1] + derivative.0[1] * delta,
            ])
        }
    }

    #[test]
    fn step_scalar_state() {
        let next = Herd(10.0).step(Births(4.0), 0.5);
        assert_eq!(next, Herd(12.0));
    }

    #[test]
    fn step_pair_state() {
        let next = Pair([40.0, 9.0]).step(PairRate([-3.2, 2.7]), 0.5);
        assert_eq!(next, Pair([38.4, 10.35]));
    }

    #[test]
    fn derivative_alias_names_the_associated_type() {
        let rate: DerivativeOf<Herd, f64> = Births(-1.0);
        assert_eq!(Herd(1.0).step(rate, 1.0), Herd(0.0));
    }
}
