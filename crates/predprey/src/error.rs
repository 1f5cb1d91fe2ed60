use predprey_solvers::transient::euler;
use thiserror::Error;

use crate::{config::ConfigError, export::CsvError, params::ParameterError};

/// Errors returned by the simulator and the tooling around it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("integration failed: {0}")]
    Solver(#[from] euler::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] CsvError),
}

pub type Result<T> = std::result::Result<T, Error>;
