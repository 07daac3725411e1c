use serde::{Deserialize, Serialize};

use super::{AssessmentContribution, Assessor, FactorKind, Rule, Wording};
use crate::diagnosis::profile::{HealthProfile, SmokingStatus, StressLevel};
use crate::diagnosis::recommendations::{Priority, RecommendationCategory};
use crate::diagnosis::thresholds::{ExerciseTier, SleepTier, ThresholdTable};

/// How the lifestyle assessor treats absent exercise and sleep hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLifestylePolicy {
    /// Absent hours contribute nothing, like every other assessor's absent fields.
    #[default]
    Skip,
    /// Absent hours read as zero and land in the insufficient branches, so an empty
    /// lifestyle section costs two risk points.
    ZeroDefault,
}

impl MissingLifestylePolicy {
    fn hours(self, value: Option<f64>) -> Option<f64> {
        match self {
            MissingLifestylePolicy::Skip => value,
            MissingLifestylePolicy::ZeroDefault => Some(value.unwrap_or(0.0)),
        }
    }
}

/// Exercise, sleep, smoking and stress. Absent smoking or stress is always neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifestyleAssessor {
    missing: MissingLifestylePolicy,
}

impl LifestyleAssessor {
    pub fn new(missing: MissingLifestylePolicy) -> Self {
        Self { missing }
    }
}

impl Assessor for LifestyleAssessor {
    fn factor(&self) -> FactorKind {
        FactorKind::Lifestyle
    }

    fn assess(
        &self,
        profile: &HealthProfile,
        thresholds: &ThresholdTable,
    ) -> AssessmentContribution {
        let mut contribution = AssessmentContribution::default();

        if let Some(exercise) = self.missing.hours(profile.exercise_hours_per_week) {
            let detail = format!("{exercise}h/week");
            let tier = thresholds.exercise.classify(exercise);
            contribution.apply(&exercise_rule(tier), Some(&detail));
        }

        if let Some(sleep) = self.missing.hours(profile.sleep_hours_per_night) {
            let detail = format!("{sleep}h/night");
            contribution.apply(&sleep_rule(thresholds.sleep.classify(sleep)), Some(&detail));
        }

        if let Some(status) = profile.smoking_status {
            contribution.apply(&smoking_rule(status), None);
        }

        if let Some(stress) = profile.stress_level {
            contribution.apply(&stress_rule(stress), None);
        }

        contribution
    }
}

fn exercise_rule(tier: ExerciseTier) -> Rule {
    match tier {
        ExerciseTier::Insufficient => {
            Rule::concern(Wording::new("Insufficient physical activity"), 1).advise(
                Priority::High,
                RecommendationCategory::Exercise,
                "Target 150 minutes/week moderate exercise",
            )
        }
        ExerciseTier::MeetsGuideline => {
            Rule::positive(Wording::new("Meeting exercise guidelines"), 1)
        }
    }
}

fn sleep_rule(tier: SleepTier) -> Rule {
    match tier {
        SleepTier::Short => Rule::concern(Wording::new("Insufficient sleep"), 1).advise(
            Priority::Medium,
            RecommendationCategory::Lifestyle,
            "Aim for 7-8 hours sleep - affects glucose control",
        ),
        SleepTier::Borderline | SleepTier::Long => Rule::NEUTRAL,
        SleepTier::Healthy => Rule::positive(Wording::new("Healthy sleep duration"), 1),
    }
}

fn smoking_rule(status: SmokingStatus) -> Rule {
    match status {
        SmokingStatus::Current => Rule::concern(
            Wording::noted("Current smoker", "major complication risk"),
            3,
        )
        .advise(
            Priority::Critical,
            RecommendationCategory::Lifestyle,
            "Smoking cessation program - doubles complication risk",
        ),
        SmokingStatus::Never => Rule::positive(Wording::new("Non-smoker"), 1),
        SmokingStatus::Former => Rule::NEUTRAL,
    }
}

fn stress_rule(stress: StressLevel) -> Rule {
    match stress {
        StressLevel::High => {
            Rule::concern(Wording::new("High stress levels affect glucose control"), 1).advise(
                Priority::Medium,
                RecommendationCategory::MentalHealth,
                "Practice stress management techniques",
            )
        }
        StressLevel::Low | StressLevel::Medium => Rule::NEUTRAL,
    }
}
