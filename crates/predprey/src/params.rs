//! Simulation parameters and their validation.
//!
//! Two levels of checking exist. [`SimulationParameters::validate`] enforces
//! what the integrator needs to terminate and stay meaningful (positive rates
//! and step, a step no longer than the run). [`SimulationParameters::check_ranges`]
//! additionally applies the ranges offered by the interactive input widgets,
//! listed in [`INPUT_RANGES`].

use predprey_solvers::transient::GridError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ModelKind, Populations, Rates};

/// Carrying capacity of the logistic model unless configured otherwise.
pub const DEFAULT_CARRYING_CAPACITY: f64 = 100.0;

/// Errors raised for parameters a simulation cannot run with.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("time step {dt} is longer than the simulated duration {duration}")]
    StepExceedsDuration { dt: f64, duration: f64 },

    #[error("{name} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Everything needed to run one simulation.
///
/// Every field has a default, so a configuration file only has to name the
/// values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {
    pub model: ModelKind,
    /// Prey growth rate.
    pub alpha: f64,
    /// Predation rate.
    pub beta: f64,
    /// Predator death rate.
    pub gamma: f64,
    /// Rate at which eaten prey become new predators.
    pub delta: f64,
    /// Initial prey population.
    pub x0: f64,
    /// Initial predator population.
    pub y0: f64,
    /// Total simulated time.
    pub duration: f64,
    /// Integration step.
    pub dt: f64,
    /// Prey carrying capacity, used by the logistic model only.
    pub carrying_capacity: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            alpha: 0.1,
            beta: 0.02,
            gamma: 0.1,
            delta: 0.01,
            x0: 40.0,
            y0: 9.0,
            duration: 200.0,
            dt: 0.1,
            carrying_capacity: DEFAULT_CARRYING_CAPACITY,
        }
    }
}

impl SimulationParameters {
    #[must_use]
    pub fn rates(&self) -> Rates {
        Rates {
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            delta: self.delta,
        }
    }

    #[must_use]
    pub fn initial(&self) -> Populations {
        Populations {
            prey: self.x0,
            predator: self.y0,
        }
    }

    /// Checks that the integrator can run with these parameters.
    ///
    /// This does not reject values that merely make the run diverge; explicit
    /// Euler blowing up under aggressive rates is part of what the tool shows.
    ///
    /// # Errors
    ///
    /// Returns the first violated requirement.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("delta", self.delta),
            ("duration", self.duration),
            ("dt", self.dt),
        ] {
            positive(name, value)?;
        }
        if self.model == ModelKind::LogisticLimited {
            positive("carrying_capacity", self.carrying_capacity)?;
        }
        for (name, value) in [("x0", self.x0), ("y0", self.y0)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::Negative { name, value });
            }
        }
        if self.dt > self.duration {
            return Err(ParameterError::StepExceedsDuration {
                dt: self.dt,
                duration: self.duration,
            });
        }
        Ok(())
    }

    /// Validates, then checks every value against [`INPUT_RANGES`].
    ///
    /// # Errors
    ///
    /// Returns the first violated requirement or range.
    pub fn check_ranges(&self) -> Result<(), ParameterError> {
        self.validate()?;
        INPUT_RANGES.iter().try_for_each(|range| range.check(self))
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { name, value })
    }
}

/// Inclusive bounds the input widgets allow for one parameter.
#[derive(Debug, Clone, Copy)]
pub struct InputRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    value: fn(&SimulationParameters) -> f64,
}

impl InputRange {
    /// Reads this range's parameter from `params`.
    #[must_use]
    pub fn value(&self, params: &SimulationParameters) -> f64 {
        (self.value)(params)
    }

    /// Fails if the parameter lies outside `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfRange`] naming the parameter.
    pub fn check(&self, params: &SimulationParameters) -> Result<(), ParameterError> {
        let value = self.value(params);
        if (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(ParameterError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Ranges of the interactive input widgets.
pub const INPUT_RANGES: [InputRange; 8] = [
    InputRange {
        name: "alpha",
        min: 0.01,
        max: 1.0,
        value: |p| p.alpha,
    },
    InputRange {
        name: "beta",
        min: 0.001,
        max: 0.1,
        value: |p| p.beta,
    },
    InputRange {
        name: "gamma",
        min: 0.01,
        max: 1.0,
        value: |p| p.gamma,
    },
    InputRange {
        name: "delta",
        min: 0.001,
        max: 0.1,
        value: |p| p.delta,
    },
    InputRange {
        name: "x0",
        min: 1.0,
        max: 100.0,
        value: |p| p.x0,
    },
    InputRange {
        name: "y0",
        min: 1.0,
        max: 100.0,
        value: |p| p.y0,
    },
    InputRange {
        name: "duration",
        min: 10.0,
        max: 500.0,
        value: |p| p.duration,
    },
    InputRange {
        name: "dt",
        min: 0.01,
        max: 1.0,
        value: |p| p.dt,
    },
];
