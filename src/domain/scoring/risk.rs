use chrono::{DateTime, Utc};

use super::rating::calculate_risk_rating;
use super::response_type::ResponseType;
use super::risk_status::RiskStatus;

/// A risk as supplied by the register. The engine never mutates it.
#[derive(PartialEq, Clone, Debug)]
pub struct Risk {
    risk_id: String,
    title: String,
    probability: f64,
    impact: f64,
    risk_rating: f64,
    response_type: ResponseType,
    risk_status: RiskStatus,
    updated_at: Option<DateTime<Utc>>,
}

impl Risk {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        risk_id: impl Into<String>,
        title: impl Into<String>,
        probability: f64,
        impact: f64,
        risk_rating: f64,
        response_type: ResponseType,
        risk_status: RiskStatus,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            risk_id: risk_id.into(),
            title: title.into(),
            probability,
            impact,
            risk_rating,
            response_type,
            risk_status,
            updated_at,
        }
    }

    /// A freshly entered risk whose stored rating is derived from its inputs.
    pub fn assessed(
        risk_id: impl Into<String>,
        title: impl Into<String>,
        probability: f64,
        impact: f64,
        response_type: ResponseType,
        risk_status: RiskStatus,
    ) -> Self {
        Self::new(
            risk_id,
            title,
            probability,
            impact,
            calculate_risk_rating(probability, impact),
            response_type,
            risk_status,
            None,
        )
    }

    pub fn risk_id(&self) -> &str {
        &self.risk_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn impact(&self) -> f64 {
        self.impact
    }

    /// The rating persisted with the risk, which may be stale.
    pub fn risk_rating(&self) -> f64 {
        self.risk_rating
    }

    /// The rating recomputed from the current probability and impact.
    pub fn live_rating(&self) -> f64 {
        calculate_risk_rating(self.probability, self.impact)
    }

    pub fn has_stale_rating(&self) -> bool {
        self.live_rating() != self.risk_rating
    }

    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    pub fn risk_status(&self) -> RiskStatus {
        self.risk_status
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// An issue only carries an impact, bucketed next to risks in the distribution.
#[derive(PartialEq, Clone, Debug)]
pub struct Issue {
    issue_id: String,
    title: String,
    impact: f64,
}

impl Issue {
    pub fn new(issue_id: impl Into<String>, title: impl Into<String>, impact: f64) -> Self {
        Self {
            issue_id: issue_id.into(),
            title: title.into(),
            impact,
        }
    }

    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn impact(&self) -> f64 {
        self.impact
    }
}
