// src/types/response.rs
use serde::{Deserialize, Serialize};

// ===== Recommendation Service Response Types =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    /// Nominally 0-100, taken as sent.
    pub match_score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<JobRecommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationResponse {
    /// Missing and empty lists are treated alike.
    pub fn recommendations(&self) -> &[JobRecommendation] {
        self.recommendations.as_deref().unwrap_or_default()
    }

    pub fn has_recommendations(&self) -> bool {
        !self.recommendations().is_empty()
    }
}
