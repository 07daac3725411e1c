use super::{AssessmentContribution, Assessor, FactorKind, Rule, Wording};
use crate::diagnosis::profile::HealthProfile;
use crate::diagnosis::recommendations::{Priority, RecommendationCategory};
use crate::diagnosis::thresholds::{Hba1cTier, ThresholdTable};

/// HbA1c assessment. Carries the heaviest weights in the engine (risk up to 4).
#[derive(Debug, Clone, Copy, Default)]
pub struct GlycemicAssessor;

impl Assessor for GlycemicAssessor {
    fn factor(&self) -> FactorKind {
        FactorKind::Glycemic
    }

    fn assess(
        &self,
        profile: &HealthProfile,
        thresholds: &ThresholdTable,
    ) -> AssessmentContribution {
        let mut contribution = AssessmentContribution::default();
        let Some(hba1c) = profile.hba1c else {
            return contribution;
        };

        let detail = format!("HbA1c: {hba1c}%");
        contribution.apply(&rule(thresholds.hba1c.classify(hba1c)), Some(&detail));
        contribution
    }
}

fn rule(tier: Hba1cTier) -> Rule {
    match tier {
        Hba1cTier::Excellent => Rule::positive(Wording::new("Excellent glucose control"), 2),
        Hba1cTier::Good => Rule::positive(Wording::new("Good glucose control"), 1).advise(
            Priority::Medium,
            RecommendationCategory::Glucose,
            "Maintain current management plan",
        ),
        Hba1cTier::Suboptimal => Rule::concern(Wording::new("Suboptimal glucose control"), 2)
            .advise(
                Priority::High,
                RecommendationCategory::Glucose,
                "Review medication plan with doctor - target HbA1c <7%",
            ),
        Hba1cTier::Poor => Rule::concern(Wording::new("Poor glucose control"), 3).advise(
            Priority::Critical,
            RecommendationCategory::Glucose,
            "Schedule urgent appointment - high complication risk",
        ),
        Hba1cTier::Critical => Rule::concern(Wording::new("Critical glucose control"), 4).advise(
            Priority::Critical,
            RecommendationCategory::Glucose,
            "URGENT: Contact healthcare provider immediately",
        ),
    }
}
