use super::risk_level::{EXTREME_COLOR, HIGH_COLOR, LOW_COLOR, MODERATE_COLOR};

/// A canonical rating on the Risk Status Score table.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ScoreBucket {
    score: u8,
    color: &'static str,
}

impl ScoreBucket {
    const fn new(score: u8, color: &'static str) -> Self {
        Self { score, color }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Row color on the score table only; classification uses the band tables.
    pub fn color(&self) -> &'static str {
        self.color
    }

    pub fn matches(&self, rating: f64) -> bool {
        rating == f64::from(self.score)
    }
}

/// The score table rows in display order. The order is part of the
/// weighted calculation when totals are accumulated while scanning.
pub static SCORE_BUCKETS: [ScoreBucket; 14] = [
    ScoreBucket::new(100, EXTREME_COLOR),
    ScoreBucket::new(80, EXTREME_COLOR),
    ScoreBucket::new(64, EXTREME_COLOR),
    ScoreBucket::new(60, HIGH_COLOR),
    ScoreBucket::new(48, HIGH_COLOR),
    ScoreBucket::new(36, HIGH_COLOR),
    ScoreBucket::new(40, MODERATE_COLOR),
    ScoreBucket::new(32, MODERATE_COLOR),
    ScoreBucket::new(24, MODERATE_COLOR),
    ScoreBucket::new(20, MODERATE_COLOR),
    ScoreBucket::new(16, MODERATE_COLOR),
    ScoreBucket::new(12, LOW_COLOR),
    ScoreBucket::new(8, LOW_COLOR),
    ScoreBucket::new(4, LOW_COLOR),
];
