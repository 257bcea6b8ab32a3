use super::risk_level::RiskCategory;

/// Narrative shown under a project score card. Mitigated scores are framed
/// as remaining exposure after treatment.
pub fn describe_category(category: RiskCategory, mitigated: bool) -> &'static str {
    match (category, mitigated) {
        (RiskCategory::Extreme, false) => {
            "Extreme risk exposure. Immediate action is required and the project board must be informed."
        }
        (RiskCategory::High, false) => {
            "High risk exposure. Senior management attention is required and treatment plans must be in place."
        }
        (RiskCategory::Moderate, false) => {
            "Medium risk exposure. Management responsibility must be specified and risks reviewed regularly."
        }
        (RiskCategory::Low, false) => {
            "Low risk exposure. Manage by routine procedures."
        }
        (RiskCategory::Extreme, true) => {
            "Extreme residual risk that needs priority management attention. Immediate action is required and the project board must be informed."
        }
        (RiskCategory::High, true) => {
            "High residual risk that needs priority management attention. Senior management must review the treatment plans."
        }
        (RiskCategory::Moderate, true) => {
            "Moderate residual risk that needs management attention. Responsibility must be specified and risks reviewed regularly."
        }
        (RiskCategory::Low, true) => {
            "Low residual risk that can be managed by routine procedures."
        }
    }
}
