//! Fixed-step integration of a predator–prey model.

use predprey_core::Observer;
use predprey_solvers::transient::{TimeGrid, euler};
use tracing::{debug, warn};

use crate::{
    error::Error,
    model::{Census, Growth, PopulationModel},
    params::{ParameterError, SimulationParameters},
    problem::PopulationProblem,
    series::TimeSeries,
};

/// Event seen by a simulation observer, one per grid point.
pub type Event<'a> = euler::Event<'a, Census, Growth>;

pub use euler::Action;

/// Simulates the configured model over `[0, duration]`.
///
/// The run starts from `(x0, y0)` at `t = 0` and takes one explicit Euler
/// step per grid interval. Populations are never clamped: a run that goes
/// negative, overflows or turns NaN is returned as computed.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the parameters fail
/// [`SimulationParameters::validate`] or describe a grid too large to hold.
pub fn simulate(params: &SimulationParameters) -> Result<TimeSeries, Error> {
    simulate_observed(params, ())
}

/// Simulates like [`simulate`], reporting every grid point to `observer`.
///
/// The observer sees the initial census as step 0. Returning
/// [`Action::StopEarly`] ends the run; the series then stops at that step.
///
/// # Errors
///
/// See [`simulate`].
pub fn simulate_observed<Obs>(
    params: &SimulationParameters,
    observer: Obs,
) -> Result<TimeSeries, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    params.validate()?;
    let grid = TimeGrid::through(params.duration, params.dt).map_err(ParameterError::from)?;

    debug!(
        model = ?params.model,
        points = grid.len(),
        step = grid.step(),
        "starting simulation"
    );

    let model = PopulationModel {
        kind: params.model,
        rates: params.rates(),
        carrying_capacity: params.carrying_capacity,
    };
    let problem = PopulationProblem::new(grid);
    let initial = Census::initial(params.initial());

    let solution = euler::solve(
        &model,
        &problem,
        initial,
        grid.step(),
        grid.steps(),
        observer,
    )?;

    let series = TimeSeries::from_history(&solution.history);
    debug!(status = ?solution.status, steps = solution.steps, "finished simulation");
    if !series.is_finite() {
        warn!("populations diverged to a non-finite value");
    }

    Ok(series)
}
