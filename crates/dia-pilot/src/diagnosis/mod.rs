//! Health-risk diagnosis: threshold table, factor assessors and the aggregating engine.

mod actions;
pub mod assessors;
mod config;
pub mod import;
mod outlook;
pub mod profile;
pub mod recommendations;
pub mod router;
mod scoring;
pub mod thresholds;

#[cfg(test)]
mod tests;

pub use actions::action_items;
pub use assessors::{
    AssessmentContribution, Assessor, BloodPressureAssessor, BodyMassAssessor, FactorKind,
    GlycemicAssessor, LifestyleAssessor, LipidAssessor, MissingLifestylePolicy,
};
pub use config::DiagnosisConfig;
pub use import::{ImportedProfile, ProfileImportError, ProfileImporter};
pub use outlook::predict;
pub use profile::{DiabetesType, HealthProfile, ProfileValidationError, SmokingStatus, StressLevel};
pub use recommendations::{
    prioritize, Priority, Recommendation, RecommendationCategory, DEFAULT_RECOMMENDATION_LIMIT,
};
pub use router::{diagnosis_router, DiagnosisResponse};
pub use scoring::{health_score, risk_level, RiskLevel};
pub use thresholds::{ThresholdError, ThresholdTable};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator: an immutable threshold table plus settings, shared by reference.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    thresholds: ThresholdTable,
    lifestyle: LifestyleAssessor,
    recommendation_limit: usize,
}

impl DiagnosisEngine {
    pub fn new(thresholds: ThresholdTable, config: &DiagnosisConfig) -> Self {
        Self {
            thresholds,
            lifestyle: LifestyleAssessor::new(config.missing_lifestyle),
            recommendation_limit: config.recommendation_limit,
        }
    }

    pub fn standard() -> Self {
        Self::new(ThresholdTable::standard(), &DiagnosisConfig::default())
    }

    /// Resolve the threshold table named by the config. Fails before any evaluation runs.
    pub fn from_config(config: &DiagnosisConfig) -> Result<Self, ThresholdError> {
        let thresholds = match &config.thresholds_path {
            Some(path) => ThresholdTable::from_path(path)?,
            None => ThresholdTable::standard(),
        };
        Ok(Self::new(thresholds, config))
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Evaluate a profile as given. Total over every combination of present/absent fields.
    pub fn evaluate(&self, profile: &HealthProfile) -> DiagnosisResult {
        let mut risk_total = 0;
        let mut positive_total = 0;
        let mut key_concerns = Vec::new();
        let mut positive_factors = Vec::new();
        let mut recommendations = Vec::new();
        let mut factors = Vec::with_capacity(5);

        for assessor in assessors::in_order(&self.lifestyle) {
            let contribution = assessor.assess(profile, &self.thresholds);
            factors.push(FactorScore {
                factor: assessor.factor(),
                risk: contribution.risk,
                positive: contribution.positive,
            });

            risk_total += contribution.risk;
            positive_total += contribution.positive;
            key_concerns.extend(contribution.concerns);
            positive_factors.extend(contribution.positives);
            recommendations.extend(contribution.recommendations);
        }

        let overall_health_score = health_score(positive_total, risk_total);
        let risk_level = risk_level(overall_health_score, risk_total);
        let action_items = action_items(risk_level, key_concerns.len());

        debug!(
            risk_total,
            positive_total,
            score = overall_health_score,
            %risk_level,
            "profile evaluated"
        );

        DiagnosisResult {
            overall_health_score,
            risk_level,
            risk_total,
            positive_total,
            key_concerns,
            positive_factors,
            predicted_complications: predict(risk_total),
            recommendations: prioritize(recommendations, self.recommendation_limit),
            action_items,
            factors,
        }
    }

    /// Reject out-of-domain input before evaluating.
    pub fn evaluate_checked(
        &self,
        profile: &HealthProfile,
    ) -> Result<DiagnosisResult, ProfileValidationError> {
        profile.validate()?;
        Ok(self.evaluate(profile))
    }
}

impl Default for DiagnosisEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-assessor totals, kept so callers can audit how the score was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: FactorKind,
    pub risk: u32,
    pub positive: u32,
}

/// Composite result of one evaluation. Persisting it is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub overall_health_score: f64,
    pub risk_level: RiskLevel,
    pub risk_total: u32,
    pub positive_total: u32,
    pub key_concerns: Vec<String>,
    pub positive_factors: Vec<String>,
    pub predicted_complications: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub action_items: Vec<String>,
    pub factors: Vec<FactorScore>,
}
