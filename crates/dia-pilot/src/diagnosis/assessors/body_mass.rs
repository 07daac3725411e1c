use super::{AssessmentContribution, Assessor, FactorKind, Rule, Wording};
use crate::diagnosis::profile::HealthProfile;
use crate::diagnosis::recommendations::{Priority, RecommendationCategory};
use crate::diagnosis::thresholds::{BmiTier, ThresholdTable};

/// Weight-for-height assessment; needs both weight and height.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyMassAssessor;

impl Assessor for BodyMassAssessor {
    fn factor(&self) -> FactorKind {
        FactorKind::BodyMass
    }

    fn assess(
        &self,
        profile: &HealthProfile,
        thresholds: &ThresholdTable,
    ) -> AssessmentContribution {
        let mut contribution = AssessmentContribution::default();
        let Some(bmi) = profile.bmi() else {
            return contribution;
        };

        let detail = format!("BMI: {bmi:.1}");
        contribution.apply(&rule(thresholds.bmi.classify(bmi)), Some(&detail));
        contribution
    }
}

fn rule(tier: BmiTier) -> Rule {
    match tier {
        BmiTier::Underweight => {
            Rule::concern(Wording::noted("Underweight", "May affect glucose control"), 1)
                .advise(
                    Priority::High,
                    RecommendationCategory::Nutrition,
                    "Consult nutritionist for healthy weight gain plan",
                )
        }
        BmiTier::Normal => Rule::positive(Wording::new("Healthy weight range"), 1),
        BmiTier::Overweight => {
            Rule::concern(Wording::noted("Overweight", "Increases insulin resistance"), 1)
                .advise(
                    Priority::High,
                    RecommendationCategory::Weight,
                    "Aim for 5-10% weight loss through diet and exercise",
                )
        }
        BmiTier::Obese => Rule::concern(
            Wording::noted("Obesity", "Significantly impacts diabetes control"),
            2,
        )
        .advise(
            Priority::Critical,
            RecommendationCategory::Weight,
            "Urgent: Work with healthcare team on structured weight loss program",
        ),
    }
}
