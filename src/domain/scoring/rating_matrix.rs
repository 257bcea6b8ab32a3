//! The 5×5 probability/impact legend shown next to the register.

use super::rating::calculate_risk_rating;
use super::risk_level::{RiskLevel, get_risk_level};

pub const PROBABILITY_LEVELS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
pub const IMPACT_LEVELS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];

/// Maps a 1–5 probability ordinal to its probability.
pub fn probability_for_ordinal(ordinal: u8) -> Option<f64> {
    level_for_ordinal(&PROBABILITY_LEVELS, ordinal)
}

/// Maps a 1–5 impact ordinal to its impact.
pub fn impact_for_ordinal(ordinal: u8) -> Option<f64> {
    level_for_ordinal(&IMPACT_LEVELS, ordinal)
}

fn level_for_ordinal(levels: &[f64; 5], ordinal: u8) -> Option<f64> {
    usize::from(ordinal)
        .checked_sub(1)
        .and_then(|index| levels.get(index))
        .copied()
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct MatrixCell {
    pub probability: f64,
    pub impact: f64,
    pub rating: f64,
    pub level: &'static RiskLevel,
}

#[derive(PartialEq, Clone, Debug)]
pub struct RatingMatrix {
    rows: Vec<Vec<MatrixCell>>,
}

impl RatingMatrix {
    /// Rows run from the most to the least likely probability, columns from
    /// the lowest to the highest impact.
    pub fn standard() -> Self {
        let rows = PROBABILITY_LEVELS
            .iter()
            .rev()
            .map(|&probability| {
                IMPACT_LEVELS
                    .iter()
                    .map(|&impact| {
                        let rating = calculate_risk_rating(probability, impact);
                        MatrixCell {
                            probability,
                            impact,
                            rating,
                            level: get_risk_level(rating),
                        }
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<MatrixCell>] {
        &self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = &MatrixCell> {
        self.rows.iter().flatten()
    }
}
