use super::{AssessmentContribution, Assessor, FactorKind, Rule, Wording};
use crate::diagnosis::profile::HealthProfile;
use crate::diagnosis::recommendations::{Priority, RecommendationCategory};
use crate::diagnosis::thresholds::{HdlTier, LdlTier, ThresholdTable, TriglycerideTier};

/// LDL, HDL and triglyceride checks. Each sub-check runs only when its value is present
/// and they accumulate independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct LipidAssessor;

impl Assessor for LipidAssessor {
    fn factor(&self) -> FactorKind {
        FactorKind::Lipids
    }

    fn assess(
        &self,
        profile: &HealthProfile,
        thresholds: &ThresholdTable,
    ) -> AssessmentContribution {
        let mut contribution = AssessmentContribution::default();

        if let Some(ldl) = profile.cholesterol_ldl {
            let detail = format!("{ldl} mg/dL");
            contribution.apply(&ldl_rule(thresholds.ldl.classify(ldl)), Some(&detail));
        }

        if let Some(hdl) = profile.cholesterol_hdl {
            let detail = format!("{hdl} mg/dL");
            contribution.apply(&hdl_rule(thresholds.hdl.classify(hdl)), Some(&detail));
        }

        if let Some(triglycerides) = profile.triglycerides {
            let detail = format!("{triglycerides} mg/dL");
            let tier = thresholds.triglycerides.classify(triglycerides);
            contribution.apply(&triglyceride_rule(tier), Some(&detail));
        }

        contribution
    }
}

fn ldl_rule(tier: LdlTier) -> Rule {
    match tier {
        LdlTier::Desirable => Rule::NEUTRAL,
        LdlTier::Borderline => Rule::concern(Wording::new("Borderline high LDL"), 1).advise(
            Priority::Medium,
            RecommendationCategory::Diet,
            "Reduce saturated fat intake",
        ),
        LdlTier::High => Rule::concern(Wording::new("High LDL cholesterol"), 2).advise(
            Priority::High,
            RecommendationCategory::Cardiovascular,
            "Discuss statin therapy with doctor",
        ),
    }
}

fn hdl_rule(tier: HdlTier) -> Rule {
    match tier {
        HdlTier::Low => Rule::concern(Wording::new("Low HDL cholesterol"), 1).advise(
            Priority::Medium,
            RecommendationCategory::Exercise,
            "Increase aerobic exercise to raise HDL",
        ),
        HdlTier::Acceptable => Rule::NEUTRAL,
        HdlTier::Protective => Rule::positive(Wording::new("Good HDL cholesterol"), 1),
    }
}

fn triglyceride_rule(tier: TriglycerideTier) -> Rule {
    match tier {
        TriglycerideTier::Normal => Rule::NEUTRAL,
        TriglycerideTier::High => Rule::concern(Wording::new("High triglycerides"), 2).advise(
            Priority::High,
            RecommendationCategory::Diet,
            "Limit sugar and refined carbs",
        ),
        TriglycerideTier::VeryHigh => {
            Rule::concern(Wording::new("Very high triglycerides"), 3).advise(
                Priority::Critical,
                RecommendationCategory::Cardiovascular,
                "Urgent care needed - pancreatitis risk",
            )
        }
    }
}
