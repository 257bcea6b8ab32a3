use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::Register;
use crate::domain::scoring::{Issue, ResponseType, Risk, RiskStatus};

/// A register document as served by the REST API.
#[derive(Debug, Deserialize, Clone, Default)]
pub(super) struct JsonRegister {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub risks: Vec<JsonRisk>,
    #[serde(default)]
    pub issues: Vec<JsonIssue>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(super) struct JsonRisk {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub risk_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub impact: Option<f64>,
    #[serde(default)]
    pub risk_rating: Option<f64>,
    #[serde(default)]
    pub response_type: Option<String>,
    #[serde(default)]
    pub risk_status: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(super) struct JsonIssue {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub impact: Option<f64>,
}

fn display_id(label: Option<String>, id: Option<i64>) -> String {
    label
        .or_else(|| id.map(|id| format!("#{id}")))
        .unwrap_or_default()
}

impl From<JsonRisk> for Risk {
    fn from(value: JsonRisk) -> Self {
        Risk::new(
            display_id(value.risk_id, value.id),
            value.title.unwrap_or_default(),
            value.probability.unwrap_or_default(),
            value.impact.unwrap_or_default(),
            // A missing rating must stay visible rather than read as zero.
            value.risk_rating.unwrap_or(f64::NAN),
            ResponseType::from(value.response_type.as_deref()),
            RiskStatus::from(value.risk_status.as_deref()),
            value.updated_at,
        )
    }
}

impl From<JsonIssue> for Issue {
    fn from(value: JsonIssue) -> Self {
        Issue::new(
            display_id(value.issue_id, value.id),
            value.title.unwrap_or_default(),
            value.impact.unwrap_or_default(),
        )
    }
}

impl From<JsonRegister> for Register {
    fn from(value: JsonRegister) -> Self {
        Register {
            project: value.project,
            risks: value.risks.into_iter().map(Risk::from).collect(),
            issues: value.issues.into_iter().map(Issue::from).collect(),
        }
    }
}
