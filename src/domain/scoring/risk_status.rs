use std::fmt::{Display, Formatter};

/// Lifecycle state of a risk.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum RiskStatus {
    #[default]
    Active,
    Monitoring,
    InProgress,
    Closed,
    Eventuated,
    Open,
}

impl RiskStatus {
    /// Share of the rating that remains given the current lifecycle state.
    pub fn adjustment_factor(&self) -> f64 {
        match self {
            RiskStatus::Active | RiskStatus::Open => 1.0,
            RiskStatus::Monitoring => 0.8,
            RiskStatus::InProgress => 0.6,
            RiskStatus::Closed | RiskStatus::Eventuated => 0.0,
        }
    }
}

impl From<&str> for RiskStatus {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "monitoring" => RiskStatus::Monitoring,
            "in progress" => RiskStatus::InProgress,
            "closed" => RiskStatus::Closed,
            "eventuated" => RiskStatus::Eventuated,
            "open" => RiskStatus::Open,
            _ => RiskStatus::Active,
        }
    }
}

impl From<Option<&str>> for RiskStatus {
    fn from(value: Option<&str>) -> Self {
        value.map(RiskStatus::from).unwrap_or_default()
    }
}

impl Display for RiskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskStatus::Active => "Active",
                RiskStatus::Monitoring => "Monitoring",
                RiskStatus::InProgress => "In Progress",
                RiskStatus::Closed => "Closed",
                RiskStatus::Eventuated => "Eventuated",
                RiskStatus::Open => "Open",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Active", RiskStatus::Active, 1.0)]
    #[case("monitoring", RiskStatus::Monitoring, 0.8)]
    #[case("In Progress", RiskStatus::InProgress, 0.6)]
    #[case("IN PROGRESS", RiskStatus::InProgress, 0.6)]
    #[case("Closed", RiskStatus::Closed, 0.0)]
    #[case("eventuated", RiskStatus::Eventuated, 0.0)]
    #[case("Open", RiskStatus::Open, 1.0)]
    fn it_parses_known_statuses_ignoring_case(
        #[case] text: &str,
        #[case] expected: RiskStatus,
        #[case] factor: f64,
    ) {
        let status = RiskStatus::from(text);

        assert_eq!(status, expected);
        assert_eq!(status.adjustment_factor(), factor);
    }

    #[rstest]
    #[case("InProgress")]
    #[case("pending")]
    #[case("")]
    #[case(" closed")]
    #[case("Monitoring ")]
    fn unknown_statuses_fall_back_to_active(#[case] text: &str) {
        assert_eq!(RiskStatus::from(text), RiskStatus::Active);
    }

    #[test]
    fn in_progress_displays_with_a_space() {
        assert_eq!(RiskStatus::InProgress.to_string(), "In Progress");
    }
}
