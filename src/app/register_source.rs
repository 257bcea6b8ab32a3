use std::error::Error;

use thiserror::Error;

use crate::domain::scoring::{Issue, Risk};

/// The risks and issues of one project, as handed over by the persistence layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Register {
    pub project: Option<String>,
    pub risks: Vec<Risk>,
    pub issues: Vec<Issue>,
}

pub trait RegisterSource {
    fn load_register(&self) -> Result<Register, RegisterSourceError>;
}

#[derive(Error, Debug)]
pub enum RegisterSourceError {
    #[error("error loading the register: {0}")]
    Load(Box<dyn Error + Send + Sync>),
}
