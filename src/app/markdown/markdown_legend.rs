use std::fmt::{Display, Formatter};

use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::domain::scoring::RatingMatrix;
use crate::domain::scoring::rating_matrix::IMPACT_LEVELS;
use crate::domain::scoring::risk_level::MITIGATED_BANDS;

use super::format_number;

#[derive(Clone, Debug, Default)]
pub struct LegendCell {
    pub rating: u8,
    pub level: String,
}

impl Display for LegendCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rating, self.level)
    }
}

/// The rating legend: the probability/impact grid followed by the bands.
#[derive(Clone, Debug, Default)]
pub struct MarkdownLegend {
    pub rows: Vec<(String, Vec<LegendCell>)>,
}

impl From<&RatingMatrix> for MarkdownLegend {
    fn from(value: &RatingMatrix) -> Self {
        Self {
            rows: value
                .rows()
                .iter()
                .map(|cells| {
                    let probability = cells
                        .first()
                        .map(|cell| format_number(cell.probability, 1))
                        .unwrap_or_default();
                    let cells = cells
                        .iter()
                        .map(|cell| LegendCell {
                            rating: cell.rating as u8,
                            level: cell.level.name.to_string(),
                        })
                        .collect();
                    (probability, cells)
                })
                .collect(),
        }
    }
}

impl Display for MarkdownLegend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut headers = vec![Heading::new(
            "PROBABILITY \\ IMPACT".to_string(),
            Some(HeadingAlignment::Left),
        )];
        headers.extend(IMPACT_LEVELS.iter().map(|impact| {
            Heading::new(format_number(*impact, 0), Some(HeadingAlignment::Center))
        }));

        let grid = self
            .rows
            .iter()
            .map(|(probability, cells)| {
                std::iter::once(probability.clone())
                    .chain(cells.iter().map(LegendCell::to_string))
                    .collect::<Vec<String>>()
            })
            .collect();

        let mut grid_table = MarkdownTable::new(grid);
        grid_table.with_headings(headers);

        let band_headers = vec![
            Heading::new("LEVEL".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("RANGE".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("COLOR".to_string(), Some(HeadingAlignment::Center)),
        ];
        let bands = MITIGATED_BANDS
            .iter()
            .map(|band| {
                vec![
                    band.name.to_string(),
                    format!(
                        "{}-{}",
                        format_number(band.min_rating, 0),
                        format_number(band.max_rating, 0)
                    ),
                    band.color.to_string(),
                ]
            })
            .collect();

        let mut band_table = MarkdownTable::new(bands);
        band_table.with_headings(band_headers);

        write!(
            f,
            "### Risk Rating Legend\n{}\n{}",
            grid_table.as_markdown().unwrap_or_default(),
            band_table.as_markdown().unwrap_or_default()
        )
    }
}
