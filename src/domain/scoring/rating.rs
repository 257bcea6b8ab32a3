use super::response_type::ResponseType;
use super::risk_status::RiskStatus;

/// Rounds to the nearest integer with ties going toward positive infinity,
/// the rule the register dashboards display with.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor == 0.5 {
        floor + 1.0
    } else {
        value.round()
    }
}

/// Rounds to five decimal places using [`round_half_up`].
pub fn round5(value: f64) -> f64 {
    round_half_up(value * 100_000.0) / 100_000.0
}

/// `round(probability × impact)`. Inputs are not range checked; NaN and
/// infinities propagate.
pub fn calculate_risk_rating(probability: f64, impact: f64) -> f64 {
    round_half_up(probability * impact)
}

/// Residual risk of a single row: the raw rating scaled by the response and
/// status factors. Unknown response or status text carries full weight.
pub fn calculate_residual_risk(raw_rating: f64, response_type: &str, risk_status: &str) -> f64 {
    residual_risk(
        raw_rating,
        ResponseType::from(response_type),
        RiskStatus::from(risk_status),
    )
}

pub fn residual_risk(raw_rating: f64, response_type: ResponseType, risk_status: RiskStatus) -> f64 {
    raw_rating * response_type.adjustment_factor() * risk_status.adjustment_factor()
}
