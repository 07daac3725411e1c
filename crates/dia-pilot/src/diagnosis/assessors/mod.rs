//! Per-metric-family assessors.
//!
//! Each assessor classifies its slice of the profile against the threshold table and
//! looks the resulting tier up in a rule table. Rules carry the message wording, the
//! risk/positive weights and the optional recommendation; control flow stays generic.

mod blood_pressure;
mod body_mass;
mod glycemic;
mod lifestyle;
mod lipids;

pub use blood_pressure::BloodPressureAssessor;
pub use body_mass::BodyMassAssessor;
pub use glycemic::GlycemicAssessor;
pub use lifestyle::{LifestyleAssessor, MissingLifestylePolicy};
pub use lipids::LipidAssessor;

use serde::{Deserialize, Serialize};

use super::profile::HealthProfile;
use super::recommendations::{Priority, Recommendation, RecommendationCategory};
use super::thresholds::ThresholdTable;

/// Identifies which assessor produced a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    BodyMass,
    Glycemic,
    BloodPressure,
    Lipids,
    Lifestyle,
}

/// Pure mapping from a (possibly partial) profile to a bounded contribution.
pub trait Assessor: Send + Sync {
    fn factor(&self) -> FactorKind;

    fn assess(&self, profile: &HealthProfile, thresholds: &ThresholdTable)
        -> AssessmentContribution;
}

/// Fixed invocation order; concern and recommendation order follows it.
pub(crate) fn in_order(lifestyle: &LifestyleAssessor) -> [&dyn Assessor; 5] {
    [
        &BodyMassAssessor,
        &GlycemicAssessor,
        &BloodPressureAssessor,
        &LipidAssessor,
        lifestyle,
    ]
}

/// Output of one assessor call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentContribution {
    pub risk: u32,
    pub positive: u32,
    pub concerns: Vec<String>,
    pub positives: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentContribution {
    pub fn is_empty(&self) -> bool {
        self.risk == 0
            && self.positive == 0
            && self.concerns.is_empty()
            && self.positives.is_empty()
            && self.recommendations.is_empty()
    }

    pub(crate) fn apply(&mut self, rule: &Rule, detail: Option<&str>) {
        self.risk += rule.risk;
        self.positive += rule.positive;

        match rule.finding {
            Finding::Concern(wording) => self.concerns.push(wording.describe(detail)),
            Finding::Positive(wording) => self.positives.push(wording.describe(detail)),
            Finding::Neutral => {}
        }

        if let Some(advice) = rule.advice {
            self.recommendations.push(Recommendation::new(
                advice.priority,
                advice.category,
                advice.message,
            ));
        }
    }
}

/// Outcome attached to a single tier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) finding: Finding,
    pub(crate) risk: u32,
    pub(crate) positive: u32,
    pub(crate) advice: Option<Advice>,
}

impl Rule {
    pub(crate) const NEUTRAL: Rule = Rule {
        finding: Finding::Neutral,
        risk: 0,
        positive: 0,
        advice: None,
    };

    pub(crate) const fn concern(wording: Wording, risk: u32) -> Self {
        Self {
            finding: Finding::Concern(wording),
            risk,
            positive: 0,
            advice: None,
        }
    }

    pub(crate) const fn positive(wording: Wording, positive: u32) -> Self {
        Self {
            finding: Finding::Positive(wording),
            risk: 0,
            positive,
            advice: None,
        }
    }

    pub(crate) const fn advise(
        mut self,
        priority: Priority,
        category: RecommendationCategory,
        message: &'static str,
    ) -> Self {
        self.advice = Some(Advice {
            priority,
            category,
            message,
        });
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Finding {
    Concern(Wording),
    Positive(Wording),
    Neutral,
}

/// Message shape: `label (detail) - note`, with detail and note optional.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Wording {
    label: &'static str,
    note: Option<&'static str>,
}

impl Wording {
    pub(crate) const fn new(label: &'static str) -> Self {
        Self { label, note: None }
    }

    pub(crate) const fn noted(label: &'static str, note: &'static str) -> Self {
        Self {
            label,
            note: Some(note),
        }
    }

    fn describe(&self, detail: Option<&str>) -> String {
        let mut text = self.label.to_string();
        if let Some(detail) = detail {
            text.push_str(&format!(" ({detail})"));
        }
        if let Some(note) = self.note {
            text.push_str(" - ");
            text.push_str(note);
        }
        text
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Advice {
    priority: Priority,
    category: RecommendationCategory,
    message: &'static str,
}
