use std::fmt::{Display, Formatter};

use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::app::dashboard::ProjectDashboard;
use crate::domain::scoring::ProjectScore;

use super::format_number;

#[derive(Clone, Debug, Default)]
pub struct ScoreCard {
    pub label: String,
    pub score: String,
    pub level: String,
    pub color: String,
    pub description: String,
}

impl ScoreCard {
    fn new(label: &str, score: &ProjectScore) -> Self {
        Self {
            label: label.to_string(),
            score: format_number(score.score, 0),
            level: score.level.name.to_string(),
            color: score.level.color.to_string(),
            description: score.description.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MarkdownSummary {
    pub project: String,
    pub total_risks: usize,
    pub total_issues: usize,
    pub unmitigated: ScoreCard,
    pub mitigated: ScoreCard,
}

impl From<&ProjectDashboard> for MarkdownSummary {
    fn from(value: &ProjectDashboard) -> Self {
        Self {
            project: value.project.clone(),
            total_risks: value.risk_rows.len(),
            total_issues: value
                .distribution
                .rows()
                .iter()
                .map(|row| row.issue_count())
                .sum(),
            unmitigated: ScoreCard::new("Unmitigated", &value.unmitigated),
            mitigated: ScoreCard::new("Mitigated", &value.mitigated),
        }
    }
}

impl Display for MarkdownSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers = vec![
            Heading::new("SCORE".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("VALUE".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("LEVEL".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("COLOR".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("DESCRIPTION".to_string(), Some(HeadingAlignment::Left)),
        ];

        let data = [&self.unmitigated, &self.mitigated]
            .into_iter()
            .map(|card| {
                vec![
                    card.label.clone(),
                    card.score.clone(),
                    card.level.clone(),
                    card.color.clone(),
                    card.description.clone(),
                ]
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        write!(
            f,
            "### Project Risk Status\n* **Project**: {}\n* **Risks**: {}\n* **Issues on the score table**: {}\n\n{}",
            self.project,
            self.total_risks,
            self.total_issues,
            table.as_markdown().unwrap_or_default()
        )
    }
}
