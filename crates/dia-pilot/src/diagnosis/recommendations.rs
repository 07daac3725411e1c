use serde::{Deserialize, Serialize};

/// Default cap on the number of recommendations handed back to callers.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Urgency of a recommendation; declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Nutrition,
    Weight,
    Glucose,
    Cardiovascular,
    Diet,
    Exercise,
    Lifestyle,
    MentalHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: RecommendationCategory,
    pub message: String,
}

impl Recommendation {
    pub fn new(
        priority: Priority,
        category: RecommendationCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            category,
            message: message.into(),
        }
    }
}

/// Order by priority rank, keeping emission order among equals, and keep the first `limit`.
pub fn prioritize(mut recommendations: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
    recommendations.sort_by_key(|recommendation| recommendation.priority.rank());
    recommendations.truncate(limit);
    recommendations
}
