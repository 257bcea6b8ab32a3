use super::description::describe_category;
use super::rating::{round_half_up, round5};
use super::risk::{Issue, Risk};
use super::risk_level::{RiskLevel, get_risk_level, get_unmitigated_risk_level};
use super::score_bucket::{SCORE_BUCKETS, ScoreBucket};

/// How the weighted calculation arrives at the total each bucket is divided by.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum TotalAccumulation {
    /// Every bucket is weighed against the grand total over all buckets.
    #[default]
    Precomputed,
    /// Each bucket is weighed against the count seen so far in table order,
    /// as older dashboards did.
    Running,
}

/// One row of the Risk Status Score table.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct BucketScore {
    bucket: ScoreBucket,
    risk_count: usize,
    issue_count: usize,
    response_factor: f64,
    status_factor: f64,
    raw_weighted_value: f64,
    adjusted_value: f64,
}

impl BucketScore {
    pub fn bucket(&self) -> &ScoreBucket {
        &self.bucket
    }

    pub fn risk_count(&self) -> usize {
        self.risk_count
    }

    pub fn issue_count(&self) -> usize {
        self.issue_count
    }

    /// Risks and issues together, as displayed. Only risks are weighted.
    pub fn count(&self) -> usize {
        self.risk_count + self.issue_count
    }

    pub fn response_factor(&self) -> f64 {
        self.response_factor
    }

    pub fn status_factor(&self) -> f64 {
        self.status_factor
    }

    pub fn raw_weighted_value(&self) -> f64 {
        self.raw_weighted_value
    }

    pub fn adjusted_value(&self) -> f64 {
        self.adjusted_value
    }
}

/// The weighted spread of a register over the score buckets.
#[derive(PartialEq, Clone, Debug)]
pub struct ScoreDistribution {
    rows: Vec<BucketScore>,
    total: usize,
    mitigated_score: f64,
}

impl ScoreDistribution {
    pub fn calculate(risks: &[Risk], issues: &[Issue], accumulation: TotalAccumulation) -> Self {
        let risks_by_bucket = SCORE_BUCKETS
            .iter()
            .map(|bucket| {
                let at_bucket = risks
                    .iter()
                    .filter(|risk| bucket.matches(risk.risk_rating()))
                    .collect::<Vec<_>>();
                (bucket, at_bucket)
            })
            .collect::<Vec<_>>();

        let grand_total = risks_by_bucket
            .iter()
            .map(|(_, at_bucket)| at_bucket.len())
            .sum::<usize>();

        let mut running_total = 0;
        let mut rows = Vec::with_capacity(SCORE_BUCKETS.len());
        for (bucket, at_bucket) in risks_by_bucket {
            let risk_count = at_bucket.len();
            running_total += risk_count;
            let total = match accumulation {
                TotalAccumulation::Precomputed => grand_total,
                TotalAccumulation::Running => running_total,
            };

            let response_factor =
                average_factor(&at_bucket, |risk| risk.response_type().adjustment_factor());
            let status_factor =
                average_factor(&at_bucket, |risk| risk.risk_status().adjustment_factor());

            let raw_weighted_value = round5(
                (risk_count as f64 / total.max(1) as f64) * (f64::from(bucket.score()) / 100.0),
            );
            let adjusted_value = round5(raw_weighted_value * response_factor * status_factor);

            rows.push(BucketScore {
                bucket: *bucket,
                risk_count,
                issue_count: issues
                    .iter()
                    .filter(|issue| bucket.matches(issue.impact()))
                    .count(),
                response_factor,
                status_factor,
                raw_weighted_value,
                adjusted_value,
            });
        }

        let adjusted_sum = rows.iter().map(BucketScore::adjusted_value).sum::<f64>();
        let mitigated_score = round_half_up(adjusted_sum * 100.0).clamp(0.0, 100.0);

        Self {
            rows,
            total: grand_total,
            mitigated_score,
        }
    }

    pub fn rows(&self) -> &[BucketScore] {
        &self.rows
    }

    /// Risks that landed on a bucket. Ratings off the table are not counted.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn mitigated_score(&self) -> f64 {
        self.mitigated_score
    }

    pub fn row_for(&self, score: u8) -> Option<&BucketScore> {
        self.rows.iter().find(|row| row.bucket.score() == score)
    }
}

fn average_factor(risks: &[&Risk], factor: impl Fn(&Risk) -> f64) -> f64 {
    if risks.is_empty() {
        return 1.0;
    }
    risks.iter().map(|risk| factor(*risk)).sum::<f64>() / risks.len() as f64
}

/// Mean of the stored ratings, rounded and capped at 100. Empty registers
/// score 0.
pub fn calculate_unmitigated_project_score(risks: &[Risk]) -> f64 {
    if risks.is_empty() {
        return 0.0;
    }

    let mean = risks.iter().map(Risk::risk_rating).sum::<f64>() / risks.len() as f64;
    let score = round_half_up(mean);
    if score > 100.0 { 100.0 } else { score }
}

pub fn calculate_mitigated_project_score(risks: &[Risk]) -> f64 {
    calculate_mitigated_project_score_with(risks, TotalAccumulation::default())
}

pub fn calculate_mitigated_project_score_with(
    risks: &[Risk],
    accumulation: TotalAccumulation,
) -> f64 {
    ScoreDistribution::calculate(risks, &[], accumulation).mitigated_score()
}

/// A project score together with its band and narrative.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ProjectScore {
    pub score: f64,
    pub level: &'static RiskLevel,
    pub description: &'static str,
}

impl ProjectScore {
    pub fn unmitigated(score: f64) -> Self {
        let level = get_unmitigated_risk_level(score);
        Self {
            score,
            level,
            description: describe_category(level.category, false),
        }
    }

    pub fn mitigated(score: f64) -> Self {
        let level = get_risk_level(score);
        Self {
            score,
            level,
            description: describe_category(level.category, true),
        }
    }
}
