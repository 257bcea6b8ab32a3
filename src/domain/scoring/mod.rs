//! Risk scoring and classification.
//!
//! Everything here is pure: the same risks and issues always produce the
//! same ratings, bands and project scores, and nothing is cached between
//! calls.

pub mod description;
pub mod project_score;
pub mod rating;
pub mod rating_matrix;
pub mod response_type;
pub mod risk;
pub mod risk_level;
pub mod risk_status;
pub mod score_bucket;

pub use description::describe_category;
pub use project_score::{
    BucketScore, ProjectScore, ScoreDistribution, TotalAccumulation,
    calculate_mitigated_project_score, calculate_mitigated_project_score_with,
    calculate_unmitigated_project_score,
};
pub use rating::{calculate_residual_risk, calculate_risk_rating, residual_risk};
pub use rating_matrix::RatingMatrix;
pub use response_type::ResponseType;
pub use risk::{Issue, Risk};
pub use risk_level::{RiskCategory, RiskLevel, get_risk_level, get_unmitigated_risk_level};
pub use risk_status::RiskStatus;
pub use score_bucket::{SCORE_BUCKETS, ScoreBucket};
