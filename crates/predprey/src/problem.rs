use std::convert::Infallible;

use predprey_core::{DerivativeOf, OdeProblem};
use predprey_solvers::transient::TimeGrid;

use crate::model::{Census, Growth, Populations};

/// Wires a [`PopulationModel`] into the Euler solver.
///
/// The integrated state is the pair of populations and the derivative is the
/// model output. Times come from the grid, indexed by step, so the census
/// clock never accumulates rounding error.
///
/// [`PopulationModel`]: crate::model::PopulationModel
#[derive(Debug, Clone, Copy)]
pub struct PopulationProblem {
    grid: TimeGrid,
}

impl PopulationProblem {
    #[must_use]
    pub fn new(grid: TimeGrid) -> Self {
        Self { grid }
    }
}

impl OdeProblem for PopulationProblem {
    type Input = Census;
    type Output = Growth;
    type Delta = f64;
    type State = Populations;
    type Error = Infallible;

    fn state(&self, census: &Census) -> Result<Populations, Infallible> {
        Ok(census.populations)
    }

    fn derivative(
        &self,
        _census: &Census,
        growth: &Growth,
    ) -> Result<DerivativeOf<Populations, f64>, Infallible> {
        Ok(*growth)
    }

    fn build_input(
        &self,
        base: &Census,
        populations: &Populations,
        _dt: &f64,
    ) -> Result<Census, Infallible> {
        let step = base.step + 1;
        Ok(Census {
            step,
            time: self.grid.time(step),
            populations: *populations,
        })
    }
}
