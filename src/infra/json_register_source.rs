use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::app::{Register, RegisterSource, RegisterSourceError};

use super::json_register::JsonRegister;

/// Reads a register exported from the REST API as a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileRegisterSource {
    path: PathBuf,
}

#[derive(Error, Debug)]
pub(in crate::infra) enum JsonRegisterError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error deserializing the register: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl From<JsonRegisterError> for RegisterSourceError {
    fn from(value: JsonRegisterError) -> Self {
        RegisterSourceError::Load(Box::new(value))
    }
}

impl JsonFileRegisterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Register, JsonRegisterError> {
        let contents = std::fs::read(&self.path).map_err(|source| JsonRegisterError::Read {
            path: self.path.clone(),
            source,
        })?;
        let document: JsonRegister = serde_json::from_slice(&contents)?;

        Ok(document.into())
    }
}

impl RegisterSource for JsonFileRegisterSource {
    fn load_register(&self) -> Result<Register, RegisterSourceError> {
        let register = self.read()?;
        info!(
            path = %self.path.display(),
            risks = register.risks.len(),
            issues = register.issues.len(),
            "loaded register"
        );
        Ok(register)
    }
}
