use serde::{Deserialize, Serialize};

/// A single outfit suggestion returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub outfit: String,
    pub color: String,
    pub explanation: String,
}

/// Full response body for the recommendation endpoint
///
/// `recommendations` holds at most three entries; the fallback generator
/// always produces exactly three. `top_tip` is a single styling suggestion
/// appended to every response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub top_tip: String,
}
