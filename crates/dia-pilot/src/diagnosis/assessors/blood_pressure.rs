use super::{AssessmentContribution, Assessor, FactorKind, Rule, Wording};
use crate::diagnosis::profile::HealthProfile;
use crate::diagnosis::recommendations::{Priority, RecommendationCategory};
use crate::diagnosis::thresholds::{PressureTier, ThresholdTable};

/// Joint systolic/diastolic assessment; a reading is only healthy when both are.
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureAssessor;

impl Assessor for BloodPressureAssessor {
    fn factor(&self) -> FactorKind {
        FactorKind::BloodPressure
    }

    fn assess(
        &self,
        profile: &HealthProfile,
        thresholds: &ThresholdTable,
    ) -> AssessmentContribution {
        let mut contribution = AssessmentContribution::default();
        let (Some(systolic), Some(diastolic)) = (
            profile.blood_pressure_systolic,
            profile.blood_pressure_diastolic,
        ) else {
            return contribution;
        };

        let tier = thresholds.classify_blood_pressure(systolic, diastolic);
        let detail = format!("{systolic}/{diastolic}");
        contribution.apply(&rule(tier), Some(&detail));
        contribution
    }
}

fn rule(tier: PressureTier) -> Rule {
    match tier {
        PressureTier::Normal => Rule::positive(Wording::new("Healthy blood pressure"), 1),
        PressureTier::Elevated => Rule::concern(Wording::new("Elevated blood pressure"), 1)
            .advise(
                Priority::Medium,
                RecommendationCategory::Cardiovascular,
                "Monitor BP regularly, reduce sodium intake",
            ),
        PressureTier::High => Rule::concern(Wording::new("High blood pressure"), 2).advise(
            Priority::High,
            RecommendationCategory::Cardiovascular,
            "Consult doctor about BP medication adjustment",
        ),
    }
}
