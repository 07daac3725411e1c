use super::scoring::RiskLevel;

/// Concern count above which an extra "work through them" directive is added.
const CONCERN_BACKLOG: usize = 3;

pub fn action_items(risk_level: RiskLevel, concern_count: usize) -> Vec<String> {
    let (first, second) = match risk_level {
        RiskLevel::Critical => (
            "Schedule urgent appointment with healthcare provider within 48 hours",
            "Do not delay - immediate medical evaluation needed",
        ),
        RiskLevel::High => (
            "Schedule appointment with doctor within 1-2 weeks",
            "Start implementing lifestyle changes today",
        ),
        RiskLevel::Moderate => (
            "Schedule routine follow-up within 1 month",
            "Focus on areas flagged in recommendations",
        ),
        RiskLevel::Low => (
            "Continue current management plan",
            "Maintain healthy habits and regular monitoring",
        ),
    };

    let mut actions = vec![first.to_string(), second.to_string()];
    if concern_count > CONCERN_BACKLOG {
        actions.push(format!(
            "Address {concern_count} identified health concerns systematically"
        ));
    }
    actions
}
