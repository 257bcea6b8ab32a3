use std::fmt::{Display, Formatter};

use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::domain::scoring::ScoreDistribution;

use super::format_number;

#[derive(Clone, Debug, Default)]
pub struct RiskStatusScoreRow {
    pub score: u8,
    pub color: String,
    pub count: usize,
    pub risks: usize,
    pub issues: usize,
    pub raw_weighted_value: f64,
    pub response_factor: f64,
    pub status_factor: f64,
    pub adjusted_value: f64,
}

#[derive(Clone, Debug, Default)]
pub struct RiskStatusScoreTable {
    pub rows: Vec<RiskStatusScoreRow>,
    pub total: usize,
    pub mitigated_score: f64,
}

impl From<&ScoreDistribution> for RiskStatusScoreTable {
    fn from(value: &ScoreDistribution) -> Self {
        Self {
            rows: value
                .rows()
                .iter()
                .map(|row| RiskStatusScoreRow {
                    score: row.bucket().score(),
                    color: row.bucket().color().to_string(),
                    count: row.count(),
                    risks: row.risk_count(),
                    issues: row.issue_count(),
                    raw_weighted_value: row.raw_weighted_value(),
                    response_factor: row.response_factor(),
                    status_factor: row.status_factor(),
                    adjusted_value: row.adjusted_value(),
                })
                .collect(),
            total: value.total(),
            mitigated_score: value.mitigated_score(),
        }
    }
}

impl Display for RiskStatusScoreTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers = vec![
            Heading::new("SCORE".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("COUNT".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("RISKS".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("ISSUES".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("WEIGHTED".to_string(), Some(HeadingAlignment::Right)),
            Heading::new("RESPONSE".to_string(), Some(HeadingAlignment::Right)),
            Heading::new("STATUS".to_string(), Some(HeadingAlignment::Right)),
            Heading::new("ADJUSTED".to_string(), Some(HeadingAlignment::Right)),
            Heading::new("COLOR".to_string(), Some(HeadingAlignment::Center)),
        ];

        let count_cell = |count: usize| {
            if count > 0 {
                count.to_string()
            } else {
                "-".to_string()
            }
        };

        let data = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.score.to_string(),
                    count_cell(row.count),
                    count_cell(row.risks),
                    count_cell(row.issues),
                    format_number(row.raw_weighted_value, 5),
                    format_number(row.response_factor, 2),
                    format_number(row.status_factor, 2),
                    format_number(row.adjusted_value, 5),
                    row.color.clone(),
                ]
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        write!(
            f,
            "### Risk Status Score\n{}\n* **Weighted risks**: {}\n* **Mitigated score**: {}\n",
            table.as_markdown().unwrap_or_default(),
            self.total,
            format_number(self.mitigated_score, 0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{Issue, ResponseType, Risk, RiskStatus, TotalAccumulation};

    #[test]
    fn it_lists_every_bucket_in_table_order() {
        let risks = vec![Risk::assessed(
            "R-1",
            "risk",
            0.8,
            100.0,
            ResponseType::Accept,
            RiskStatus::Active,
        )];
        let issues = vec![Issue::new("I-1", "issue", 12.0)];
        let distribution =
            ScoreDistribution::calculate(&risks, &issues, TotalAccumulation::Precomputed);

        let table = RiskStatusScoreTable::from(&distribution);

        assert_eq!(table.rows.len(), 14);
        assert_eq!(table.rows[1].score, 80);
        assert_eq!(table.rows[1].count, 1);
        assert_eq!(table.rows[11].score, 12);
        assert_eq!(table.rows[11].issues, 1);
        assert_eq!(table.total, 1);

        let markdown = table.to_string();
        assert!(markdown.starts_with("### Risk Status Score"));
        assert!(markdown.contains("0.80000"));
        assert!(markdown.contains("#DC3545"));
        assert!(markdown.contains("* **Mitigated score**: 80"));
    }
}
