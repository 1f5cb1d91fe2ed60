//! Predator–prey population simulator.
//!
//! Integrates the classic Lotka–Volterra model, or its logistic variant with
//! a prey carrying capacity, using fixed-step explicit Euler:
//!
//! ```no_run
//! use predprey::{SimulationParameters, simulate};
//!
//! let series = simulate(&SimulationParameters::default())?;
//! let last = series.last().expect("a run holds at least the initial state");
//! println!("t = {}: {} prey, {} predators", last.time, last.prey, last.predator);
//! # Ok::<(), predprey::Error>(())
//! ```
//!
//! Around the integrator sit the pieces of the interactive tool: localized
//! [`Strings`], light and dark [`Theme`]s, CSV [`export`] and chart
//! descriptions built by [`charts`].

pub mod config;
pub mod export;

mod chart;
mod error;
mod i18n;
mod model;
mod params;
mod problem;
mod series;
mod simulate;
mod theme;

pub use chart::{charts, phase_portrait, populations_over_time};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use export::CsvError;
pub use i18n::{LANGUAGE_PROMPT, Language, Strings, UnknownLanguage};
pub use model::{
    Census, Growth, ModelKind, PopulationModel, Populations, Rates, classic, logistic,
};
pub use params::{
    DEFAULT_CARRYING_CAPACITY, INPUT_RANGES, InputRange, ParameterError, SimulationParameters,
};
pub use problem::PopulationProblem;
pub use series::{Extremes, Record, Summary, TimeSeries};
pub use simulate::{Action, Event, simulate, simulate_observed};
pub use theme::{Palette, Theme};
