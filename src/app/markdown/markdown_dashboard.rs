use std::fmt::{Display, Formatter};

use crate::app::dashboard::ProjectDashboard;

use super::{MarkdownSummary, ResidualRiskTable, RiskStatusScoreTable};

#[derive(Clone, Debug, Default)]
pub struct MarkdownDashboard {
    pub summary: MarkdownSummary,
    pub score_table: RiskStatusScoreTable,
    pub residual_risks: ResidualRiskTable,
}

impl From<&ProjectDashboard> for MarkdownDashboard {
    fn from(value: &ProjectDashboard) -> Self {
        Self {
            summary: MarkdownSummary::from(value),
            score_table: RiskStatusScoreTable::from(&value.distribution),
            residual_risks: ResidualRiskTable::from(value.risk_rows.as_slice()),
        }
    }
}

impl Display for MarkdownDashboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "## Risk Register Dashboard\n{}\n{}\n{}",
            self.summary, self.score_table, self.residual_risks
        )
    }
}
