use std::fmt;

use serde::{Deserialize, Serialize};

const BASE_SCORE: i64 = 50;
const POSITIVE_WEIGHT: i64 = 5;
const RISK_WEIGHT: i64 = 8;

/// Discrete risk band derived from the score and the raw risk total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `50 + 5 * positive - 8 * risk`, clamped to `[0, 100]`.
pub fn health_score(positive_total: u32, risk_total: u32) -> f64 {
    let raw = BASE_SCORE + POSITIVE_WEIGHT * i64::from(positive_total)
        - RISK_WEIGHT * i64::from(risk_total);
    raw.clamp(0, 100) as f64
}

/// Lower bands need both a high enough score and few enough risk flags.
pub fn risk_level(score: f64, risk_total: u32) -> RiskLevel {
    if score >= 80.0 && risk_total <= 2 {
        RiskLevel::Low
    } else if score >= 60.0 && risk_total <= 4 {
        RiskLevel::Moderate
    } else if score >= 40.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_at_both_ends() {
        assert_eq!(health_score(0, 0), 50.0);
        assert_eq!(health_score(12, 0), 100.0);
        assert_eq!(health_score(0, 9), 0.0);
        assert_eq!(health_score(3, 1), 57.0);
    }

    #[test]
    fn high_score_with_many_risk_flags_is_not_low() {
        assert_eq!(risk_level(85.0, 2), RiskLevel::Low);
        assert_eq!(risk_level(85.0, 3), RiskLevel::Moderate);
        assert_eq!(risk_level(85.0, 5), RiskLevel::High);
        assert_eq!(risk_level(59.0, 0), RiskLevel::High);
        assert_eq!(risk_level(40.0, 7), RiskLevel::High);
        assert_eq!(risk_level(39.0, 0), RiskLevel::Critical);
    }
}
