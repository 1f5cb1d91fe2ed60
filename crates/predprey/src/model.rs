//! Predator–prey rate equations.
//!
//! Both models share the predator equation
//!
//! ```text
//! dy/dt = δ·x·y − γ·y
//! ```
//!
//! and differ in how prey grow:
//!
//! ```text
//! classic:   dx/dt = α·x − β·x·y
//! logistic:  dx/dt = α·x·(1 − x/K) − β·x·y
//! ```

use std::convert::Infallible;

use predprey_core::{Model, StepIntegrable};
use serde::{Deserialize, Serialize};

use crate::i18n::Strings;

/// Which set of rate equations drives the prey population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Unbounded exponential prey growth.
    #[default]
    #[serde(rename = "classic")]
    ClassicLotkaVolterra,

    /// Prey growth limited by a carrying capacity.
    #[serde(rename = "logistic")]
    LogisticLimited,
}

impl ModelKind {
    pub const ALL: [Self; 2] = [Self::ClassicLotkaVolterra, Self::LogisticLimited];

    /// Returns the display name of the model in the given language.
    #[must_use]
    pub fn label(self, strings: &Strings) -> &'static str {
        match self {
            Self::ClassicLotkaVolterra => strings.lotka_volterra,
            Self::LogisticLimited => strings.logistic_lv,
        }
    }
}

/// The four rate constants shared by both models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

/// Sizes of both populations at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Populations {
    pub prey: f64,
    pub predator: f64,
}

/// Instantaneous rate of change of both populations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    pub prey: f64,
    pub predator: f64,
}

impl StepIntegrable<f64> for Populations {
    type Derivative = Growth;

    fn step(&self, growth: Growth, dt: f64) -> Self {
        Populations {
            prey: self.prey + growth.prey * dt,
            predator: self.predator + growth.predator * dt,
        }
    }
}

/// Model input: the populations at a point of the time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Census {
    /// Index of the grid point.
    pub step: usize,
    pub time: f64,
    pub populations: Populations,
}

impl Census {
    /// The census at `t = 0`.
    #[must_use]
    pub fn initial(populations: Populations) -> Self {
        Self {
            step: 0,
            time: 0.0,
            populations,
        }
    }
}

/// Classic Lotka–Volterra rates.
#[must_use]
pub fn classic(populations: Populations, rates: &Rates) -> Growth {
    let Populations { prey, predator } = populations;
    Growth {
        prey: rates.alpha * prey - rates.beta * prey * predator,
        predator: predator_growth(populations, rates),
    }
}

/// Lotka–Volterra rates with logistic prey growth up to `capacity`.
#[must_use]
pub fn logistic(populations: Populations, rates: &Rates, capacity: f64) -> Growth {
    let Populations { prey, predator } = populations;
    Growth {
        prey: rates.alpha * prey * (1.0 - prey / capacity) - rates.beta * prey * predator,
        predator: predator_growth(populations, rates),
    }
}

fn predator_growth(populations: Populations, rates: &Rates) -> f64 {
    let Populations { prey, predator } = populations;
    rates.delta * prey * predator - rates.gamma * predator
}

/// A predator–prey model evaluated as a [`Model`].
///
/// Calling it with a [`Census`] returns the [`Growth`] at that census.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationModel {
    pub kind: ModelKind,
    pub rates: Rates,
    pub carrying_capacity: f64,
}

impl PopulationModel {
    /// Returns the rates of change at `populations`.
    #[must_use]
    pub fn growth(&self, populations: Populations) -> Growth {
        match self.kind {
            ModelKind::ClassicLotkaVolterra => classic(populations, &self.rates),
            ModelKind::LogisticLimited => logistic(populations, &self.rates, self.carrying_capacity),
        }
    }
}

impl Model for PopulationModel {
    type Input = Census;
    type Output = Growth;
    type Error = Infallible;

    fn call(&self, census: &Census) -> Result<Growth, Infallible> {
        Ok(self.growth(census.populations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::i18n::Language;

    const RATES: Rates = Rates {
        alpha: 0.1,
        beta: 0.02,
        gamma: 0.1,
        delta: 0.01,
    };

    const START: Populations = Populations {
        prey: 40.0,
        predator: 9.0,
    };

    #[test]
    fn classic_rates() {
        let growth = classic(START, &RATES);

        // 0.1·40 − 0.02·40·9 = 4 − 7.2
        assert_relative_eq!(growth.prey, -3.2, epsilon = 1e-12);
        // 0.01·40·9 − 0.1·9 = 3.6 − 0.9
        assert_relative_eq!(growth.predator, 2.7, epsilon = 1e-12);
    }

    #[test]
    fn logistic_rates() {
        let growth = logistic(START, &RATES, 100.0);

        // 0.1·40·(1 − 0.4) − 7.2 = 2.4 − 7.2
        assert_relative_eq!(growth.prey, -4.8, epsilon = 1e-12);
        assert_eq!(growth.predator, classic(START, &RATES).predator);
    }

    #[test]
    fn logistic_approaches_classic_for_large_capacity() {
        let capped = logistic(START, &RATES, 1e12);
        let free = classic(START, &RATES);

        assert_relative_eq!(capped.prey, free.prey, epsilon = 1e-9);
    }

    #[test]
    fn prey_alone_stops_growing_at_capacity() {
        let alone = Populations {
            prey: 100.0,
            predator: 0.0,
        };

        assert_eq!(logistic(alone, &RATES, 100.0).prey, 0.0);
        assert!(classic(alone, &RATES).prey > 0.0);
    }

    #[test]
    fn equilibrium_has_zero_growth() {
        // Classic coexistence point: x = γ/δ, y = α/β.
        let equilibrium = Populations {
            prey: RATES.gamma / RATES.delta,
            predator: RATES.alpha / RATES.beta,
        };

        let growth = classic(equilibrium, &RATES);

        assert_relative_eq!(growth.prey, 0.0, epsilon = 1e-12);
        assert_relative_eq!(growth.predator, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn model_dispatches_on_kind() {
        let census = Census::initial(START);
        let mut model = PopulationModel {
            kind: ModelKind::ClassicLotkaVolterra,
            rates: RATES,
            carrying_capacity: 100.0,
        };
        let classic_growth = model.call(&census).unwrap();

        model.kind = ModelKind::LogisticLimited;
        let logistic_growth = model.call(&census).unwrap();

        assert_eq!(classic_growth, classic(START, &RATES));
        assert_eq!(logistic_growth, logistic(START, &RATES, 100.0));
    }

    #[test]
    fn euler_step_moves_along_growth() {
        let next = START.step(classic(START, &RATES), 0.5);

        assert_relative_eq!(next.prey, 38.4, epsilon = 1e-12);
        assert_relative_eq!(next.predator, 10.35, epsilon = 1e-12);
    }

    #[test]
    fn labels_follow_language() {
        let en = Language::En.strings();
        let ru = Language::Ru.strings();

        assert_eq!(
            ModelKind::ClassicLotkaVolterra.label(en),
            "Classic Lotka–Volterra"
        );
        assert_eq!(
            ModelKind::LogisticLimited.label(ru),
            "Логистическая модель с ограничением ресурсов"
        );
    }
}
