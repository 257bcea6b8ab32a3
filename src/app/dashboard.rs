use itertools::Itertools;
use tracing::debug;

use crate::domain::scoring::{
    ProjectScore, ResponseType, RiskLevel, RiskStatus, ScoreDistribution,
    calculate_unmitigated_project_score, get_risk_level, residual_risk,
};

use super::config::ScoringConfig;
use super::register_source::{Register, RegisterSource, RegisterSourceError};

#[derive(Clone, Debug, PartialEq)]
pub struct RiskRow {
    pub risk_id: String,
    pub title: String,
    pub response_type: ResponseType,
    pub risk_status: RiskStatus,
    pub stored_rating: f64,
    pub live_rating: f64,
    pub level: &'static RiskLevel,
    pub residual: f64,
    pub residual_level: &'static RiskLevel,
    /// The stored rating no longer matches probability × impact.
    pub stale: bool,
}

/// Everything the register dashboard shows for one project.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDashboard {
    pub project: String,
    pub risk_rows: Vec<RiskRow>,
    pub distribution: ScoreDistribution,
    pub unmitigated: ProjectScore,
    pub mitigated: ProjectScore,
}

impl ProjectDashboard {
    pub fn build(register: &Register, config: &ScoringConfig) -> Self {
        let risk_rows = register
            .risks
            .iter()
            .map(|risk| {
                let residual = residual_risk(
                    risk.risk_rating(),
                    risk.response_type(),
                    risk.risk_status(),
                );
                RiskRow {
                    risk_id: risk.risk_id().to_string(),
                    title: risk.title().to_string(),
                    response_type: risk.response_type(),
                    risk_status: risk.risk_status(),
                    stored_rating: risk.risk_rating(),
                    live_rating: risk.live_rating(),
                    level: get_risk_level(risk.risk_rating()),
                    residual,
                    residual_level: get_risk_level(residual),
                    stale: risk.has_stale_rating(),
                }
            })
            .sorted_by(|a, b| {
                b.residual
                    .total_cmp(&a.residual)
                    .then_with(|| a.risk_id.cmp(&b.risk_id))
            })
            .collect_vec();

        let distribution =
            ScoreDistribution::calculate(&register.risks, &register.issues, config.accumulation());
        let unmitigated = ProjectScore::unmitigated(calculate_unmitigated_project_score(
            &register.risks,
        ));
        let mitigated = ProjectScore::mitigated(distribution.mitigated_score());

        debug!(
            risks = register.risks.len(),
            issues = register.issues.len(),
            unmitigated = unmitigated.score,
            mitigated = mitigated.score,
            "computed project risk status"
        );

        Self {
            project: register.project.clone().unwrap_or_default(),
            risk_rows,
            distribution,
            unmitigated,
            mitigated,
        }
    }

    pub fn from_source(
        source: &impl RegisterSource,
        config: &ScoringConfig,
    ) -> Result<Self, RegisterSourceError> {
        let register = source.load_register()?;
        Ok(Self::build(&register, config))
    }

    pub fn stale_rows(&self) -> impl Iterator<Item = &RiskRow> {
        self.risk_rows.iter().filter(|row| row.stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Accumulation;
    use crate::domain::scoring::{Issue, Risk, RiskCategory};

    struct FixedRegister(Register);

    impl RegisterSource for FixedRegister {
        fn load_register(&self) -> Result<Register, RegisterSourceError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenRegister;

    impl RegisterSource for BrokenRegister {
        fn load_register(&self) -> Result<Register, RegisterSourceError> {
            Err(RegisterSourceError::Load("database offline".into()))
        }
    }

    fn register() -> Register {
        Register {
            project: Some("Bridge upgrade".to_string()),
            risks: vec![
                Risk::assessed(
                    "R-1",
                    "Steel price rise",
                    0.8,
                    100.0,
                    ResponseType::Accept,
                    RiskStatus::Active,
                ),
                Risk::assessed(
                    "R-2",
                    "Permit delay",
                    1.0,
                    80.0,
                    ResponseType::Transfer,
                    RiskStatus::Monitoring,
                ),
                Risk::new(
                    "R-3",
                    "Crane failure",
                    0.4,
                    60.0,
                    20.0,
                    ResponseType::Avoid,
                    RiskStatus::Closed,
                    None,
                ),
            ],
            issues: vec![Issue::new("I-1", "Flooded site", 80.0)],
        }
    }

    #[test]
    fn it_scores_the_register() {
        let dashboard = ProjectDashboard::build(&register(), &ScoringConfig::default());

        assert_eq!(dashboard.project, "Bridge upgrade");
        assert_eq!(dashboard.unmitigated.score, 60.0);
        assert_eq!(dashboard.unmitigated.level.name, "High");
        assert_eq!(dashboard.mitigated.score, 32.0);
        assert_eq!(dashboard.mitigated.level.category, RiskCategory::Moderate);
        assert_eq!(dashboard.distribution.row_for(80).unwrap().count(), 3);
    }

    #[test]
    fn rows_are_ordered_by_residual_risk() {
        let dashboard = ProjectDashboard::build(&register(), &ScoringConfig::default());

        let ids = dashboard
            .risk_rows
            .iter()
            .map(|row| row.risk_id.as_str())
            .collect_vec();

        assert_eq!(ids, vec!["R-1", "R-2", "R-3"]);
        assert_eq!(dashboard.risk_rows[0].residual_level.category, RiskCategory::Extreme);
        assert_eq!(dashboard.risk_rows[1].residual_level.category, RiskCategory::Moderate);
        assert_eq!(dashboard.risk_rows[2].residual_level.category, RiskCategory::Low);
    }

    #[test]
    fn stale_ratings_are_flagged_not_fixed() {
        let dashboard = ProjectDashboard::build(&register(), &ScoringConfig::default());

        let stale = dashboard.stale_rows().collect_vec();

        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].risk_id, "R-3");
        assert_eq!(stale[0].stored_rating, 20.0);
        assert_eq!(stale[0].live_rating, 24.0);
    }

    #[test]
    fn the_configured_accumulation_is_used() {
        let config = ScoringConfig {
            total_accumulation: Accumulation::Running,
        };

        let dashboard = ProjectDashboard::build(&register(), &config);

        assert_eq!(dashboard.mitigated.score, 49.0);
    }

    #[test]
    fn it_builds_from_a_source() {
        let dashboard =
            ProjectDashboard::from_source(&FixedRegister(register()), &ScoringConfig::default())
                .unwrap();

        assert_eq!(dashboard.risk_rows.len(), 3);
    }

    #[test]
    fn source_errors_are_propagated() {
        let result = ProjectDashboard::from_source(&BrokenRegister, &ScoringConfig::default());

        assert!(matches!(result, Err(RegisterSourceError::Load(_))));
    }
}
