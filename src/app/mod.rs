pub mod config;
pub mod dashboard;
pub mod markdown;
mod register_source;

pub use config::{Accumulation, ConfigError, ScoringConfig};
pub use dashboard::{ProjectDashboard, RiskRow};
pub use register_source::{Register, RegisterSource, RegisterSourceError};
