use std::fmt::{Display, Formatter};

use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::app::dashboard::RiskRow;

use super::format_number;

#[derive(Clone, Debug, Default)]
pub struct ResidualRiskRow {
    pub risk_id: String,
    pub title: String,
    pub response_type: String,
    pub risk_status: String,
    pub rating: String,
    pub level: String,
    pub residual: String,
    pub residual_level: String,
}

impl From<&RiskRow> for ResidualRiskRow {
    fn from(value: &RiskRow) -> Self {
        let rating = if value.stale {
            format!(
                "{} (live {})",
                format_number(value.stored_rating, 0),
                format_number(value.live_rating, 0)
            )
        } else {
            format_number(value.stored_rating, 0)
        };

        Self {
            risk_id: value.risk_id.clone(),
            title: value.title.clone(),
            response_type: value.response_type.to_string(),
            risk_status: value.risk_status.to_string(),
            rating,
            level: value.level.name.to_string(),
            residual: format_number(value.residual, 1),
            residual_level: value.residual_level.name.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResidualRiskTable(pub Vec<ResidualRiskRow>);

impl From<&[RiskRow]> for ResidualRiskTable {
    fn from(value: &[RiskRow]) -> Self {
        Self(value.iter().map(ResidualRiskRow::from).collect())
    }
}

impl Display for ResidualRiskTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("");
        }

        let headers = vec![
            Heading::new("RISK".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("TITLE".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("RESPONSE".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("STATUS".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("RATING".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("LEVEL".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("RESIDUAL".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("RESIDUAL LEVEL".to_string(), Some(HeadingAlignment::Center)),
        ];

        let data = self
            .0
            .iter()
            .map(|r| {
                vec![
                    r.risk_id.clone(),
                    r.title.clone(),
                    r.response_type.clone(),
                    r.risk_status.clone(),
                    r.rating.clone(),
                    r.level.clone(),
                    r.residual.clone(),
                    r.residual_level.clone(),
                ]
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        write!(
            f,
            "\n### Residual Risk\n{}",
            table.as_markdown().unwrap_or_default()
        )
    }
}
