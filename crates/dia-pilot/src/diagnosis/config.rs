use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::assessors::MissingLifestylePolicy;
use super::recommendations::DEFAULT_RECOMMENDATION_LIMIT;

/// Engine settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    /// JSON threshold override; `None` uses the standard table.
    pub thresholds_path: Option<PathBuf>,
    pub recommendation_limit: usize,
    pub missing_lifestyle: MissingLifestylePolicy,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            thresholds_path: None,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            missing_lifestyle: MissingLifestylePolicy::default(),
        }
    }
}
