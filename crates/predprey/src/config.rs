//! TOML configuration of a run.
//!
//! ```toml
//! language = "en"
//! theme = "dark"
//!
//! [simulation]
//! model = "logistic"
//! alpha = 0.1
//! duration = 150.0
//! ```
//!
//! Every key is optional. Values left out take their defaults, and the
//! resulting parameters must lie within the ranges of [`INPUT_RANGES`].
//!
//! [`INPUT_RANGES`]: crate::params::INPUT_RANGES

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    i18n::Language,
    params::{ParameterError, SimulationParameters},
    theme::Theme,
};

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration out of range: {0}")]
    Parameters(#[from] ParameterError),
}

/// Presentation settings and simulation parameters of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Language,
    pub theme: Theme,
    pub simulation: SimulationParameters,
}

impl Config {
    /// Parses a configuration and range-checks its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys or
    /// unknown enum values, and [`ConfigError::Parameters`] for parameters
    /// outside their input ranges.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.simulation.check_ranges()?;
        Ok(config)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// see [`Config::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML, every key included.
    ///
    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use crate::model::ModelKind;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn partial_file_overrides_named_values() {
        let config = Config::from_toml_str(
            r#"
            language = "en"
            theme = "dark"

            [simulation]
            model = "logistic"
            alpha = 0.5
            duration = 150.0
            "#,
        )
        .unwrap();

        assert_eq!(config.language, Language::En);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.simulation.model, ModelKind::LogisticLimited);
        assert_eq!(config.simulation.alpha, 0.5);
        assert_eq!(config.simulation.duration, 150.0);
        assert_eq!(config.simulation.beta, 0.02);
        assert_eq!(config.simulation.carrying_capacity, 100.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = Config::from_toml_str("[simulation]\nepsilon = 1.0\n").unwrap_err();

        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let error = Config::from_toml_str("language = \"de\"\n").unwrap_err();

        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        let error = Config::from_toml_str("[simulation]\ndt = 2.0\n").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Parameters(ParameterError::OutOfRange { name: "dt", .. })
        ));
    }

    #[test]
    fn rendered_config_parses_back() {
        let config = Config {
            language: Language::Kk,
            theme: Theme::Dark,
            simulation: SimulationParameters {
                model: ModelKind::LogisticLimited,
                x0: 55.5,
                ..SimulationParameters::default()
            },
        };

        let toml = config.to_toml_string().unwrap();

        assert!(toml.contains("model = \"logistic\""));
        assert_eq!(Config::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"\n[simulation]\ny0 = 12.0").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.simulation.y0, 12.0);
    }

    #[test]
    fn missing_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let error = Config::load(&path).unwrap_err();

        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().contains("absent.toml"));
    }
}
