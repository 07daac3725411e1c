//! Qualitative complication outlook keyed on the risk total.

const HORIZON: &str = "next 6-12 months";

/// Exactly one band applies per call.
pub fn predict(risk_total: u32) -> Vec<String> {
    match risk_total {
        6.. => vec![
            format!("High risk of cardiovascular events within {HORIZON}"),
            "Increased risk of diabetes complications (retinopathy, neuropathy)".to_string(),
        ],
        4..=5 => vec![
            "Moderate risk of disease progression without intervention".to_string(),
            "May develop additional complications if control doesn't improve".to_string(),
        ],
        2..=3 => vec!["Some risk areas need attention to prevent progression".to_string()],
        _ => vec![
            "Low complication risk with current management".to_string(),
            "Good long-term prognosis with continued adherence".to_string(),
        ],
    }
}
