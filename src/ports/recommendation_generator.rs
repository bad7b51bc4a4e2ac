//! RecommendationGenerator port - ranked product suggestions.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::{CustomerInteractionData, CustomerProfile};
use crate::domain::personalization::ProductRecommendation;

/// Errors raised by a recommendation generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendationError {
    /// Nothing to recommend from.
    #[error("product catalog is empty")]
    EmptyCatalog,

    /// The model or service behind the generator is unavailable.
    #[error("recommendation service unavailable: {0}")]
    Unavailable(String),
}

/// Port for recommendation generation.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    /// Returns recommendations, best first.
    async fn generate_recommendations(
        &self,
        profile: &CustomerProfile,
        interaction: &CustomerInteractionData,
    ) -> Result<Vec<ProductRecommendation>, RecommendationError>;
}
