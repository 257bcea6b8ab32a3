use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::scoring::TotalAccumulation;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub total_accumulation: Accumulation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Accumulation {
    #[default]
    Precomputed,
    Running,
}

impl From<Accumulation> for TotalAccumulation {
    fn from(value: Accumulation) -> Self {
        match value {
            Accumulation::Precomputed => Self::Precomputed,
            Accumulation::Running => Self::Running,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ScoringConfig {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config_dir>/riskreg/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("riskreg").join("config.json"))
    }

    /// Loads the explicit path, else the default path when it exists, else
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn accumulation(&self) -> TotalAccumulation {
        self.total_accumulation.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn it_defaults_to_a_precomputed_total() {
        let config = ScoringConfig::default();

        assert_eq!(config.accumulation(), TotalAccumulation::Precomputed);
    }

    #[test]
    fn it_reads_the_accumulation_mode() {
        let config = ScoringConfig::from_json(r#"{"total_accumulation": "running"}"#).unwrap();

        assert_eq!(config.accumulation(), TotalAccumulation::Running);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ScoringConfig::from_json("{}").unwrap();

        assert_eq!(config.total_accumulation, Accumulation::Precomputed);
    }

    #[test]
    fn unknown_modes_are_rejected() {
        assert!(ScoringConfig::from_json(r#"{"total_accumulation": "sideways"}"#).is_err());
    }

    #[test]
    fn it_loads_from_an_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"total_accumulation": "running"}}"#).unwrap();

        let config = ScoringConfig::resolve(Some(file.path())).unwrap();

        assert_eq!(config.accumulation(), TotalAccumulation::Running);
    }

    #[test]
    fn a_missing_explicit_path_is_an_error() {
        let err = ScoringConfig::resolve(Some(Path::new("/nonexistent/riskreg.json"))).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn a_malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ScoringConfig::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config file"));
    }
}
