mod markdown_dashboard;
mod markdown_legend;
mod markdown_residual_table;
mod markdown_score_table;
mod markdown_summary;

pub use markdown_dashboard::MarkdownDashboard;
pub use markdown_legend::{LegendCell, MarkdownLegend};
pub use markdown_residual_table::{ResidualRiskRow, ResidualRiskTable};
pub use markdown_score_table::{RiskStatusScoreRow, RiskStatusScoreTable};
pub use markdown_summary::{MarkdownSummary, ScoreCard};

/// Renders a number with a fixed precision; NaN renders as an em dash so a
/// corrupted rating stays visible instead of reading as zero.
pub(super) fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "—".to_string();
    }
    format!("{value:.decimals$}")
}
