use std::fmt::{Display, Formatter};

/// Severity band of a score, ordered from least to most severe.
#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Debug)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Extreme,
}

impl Display for RiskCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskCategory::Low => "Low",
                RiskCategory::Moderate => "Moderate",
                RiskCategory::High => "High",
                RiskCategory::Extreme => "Extreme",
            }
        )
    }
}

pub const EXTREME_COLOR: &str = "#DC3545";
pub const HIGH_COLOR: &str = "#FD7E14";
pub const MODERATE_COLOR: &str = "#FFC107";
pub const LOW_COLOR: &str = "#28A745";

/// One row of a band table.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct RiskLevel {
    pub category: RiskCategory,
    pub name: &'static str,
    pub min_rating: f64,
    pub max_rating: f64,
    pub color: &'static str,
}

/// PMBOK bands for residual and response/status adjusted scores, most
/// severe first.
pub static MITIGATED_BANDS: [RiskLevel; 4] = [
    RiskLevel {
        category: RiskCategory::Extreme,
        name: "Extreme",
        min_rating: 64.0,
        max_rating: 100.0,
        color: EXTREME_COLOR,
    },
    RiskLevel {
        category: RiskCategory::High,
        name: "High",
        min_rating: 36.0,
        max_rating: 63.0,
        color: HIGH_COLOR,
    },
    RiskLevel {
        category: RiskCategory::Moderate,
        name: "Moderate",
        min_rating: 16.0,
        max_rating: 35.0,
        color: MODERATE_COLOR,
    },
    RiskLevel {
        category: RiskCategory::Low,
        name: "Low",
        min_rating: 0.0,
        max_rating: 15.0,
        color: LOW_COLOR,
    },
];

/// Board-approved bands for raw, unmitigated scores, most severe first.
pub static UNMITIGATED_BANDS: [RiskLevel; 4] = [
    RiskLevel {
        category: RiskCategory::Extreme,
        name: "Extreme",
        min_rating: 80.0,
        max_rating: 100.0,
        color: EXTREME_COLOR,
    },
    RiskLevel {
        category: RiskCategory::High,
        name: "High",
        min_rating: 60.0,
        max_rating: 79.0,
        color: HIGH_COLOR,
    },
    RiskLevel {
        category: RiskCategory::Moderate,
        name: "Medium",
        min_rating: 40.0,
        max_rating: 59.0,
        color: MODERATE_COLOR,
    },
    RiskLevel {
        category: RiskCategory::Low,
        name: "Low",
        min_rating: 0.0,
        max_rating: 39.0,
        color: LOW_COLOR,
    },
];

/// Classifies a score against a most-severe-first band table.
///
/// A score belongs to the first band whose lower bound it reaches, so
/// anything above the top band stays in the top band and fractional scores
/// between two integer bands fall into the lower one. Scores below every
/// band, and NaN, classify as the least severe band.
fn classify(bands: &'static [RiskLevel; 4], score: f64) -> &'static RiskLevel {
    bands
        .iter()
        .find(|band| score >= band.min_rating)
        .unwrap_or(&bands[bands.len() - 1])
}

/// Classifies a per-risk or mitigated score with the PMBOK bands.
pub fn get_risk_level(score: f64) -> &'static RiskLevel {
    classify(&MITIGATED_BANDS, score)
}

/// Classifies a raw project score with the board-approved bands.
pub fn get_unmitigated_risk_level(score: f64) -> &'static RiskLevel {
    classify(&UNMITIGATED_BANDS, score)
}
