//! The assembled personalized experience.

use serde::{Deserialize, Serialize};

use super::{CustomerPredictions, EngagementStrategy, PersonalizedContent, ProductRecommendation};
use crate::domain::customer::CustomerProfile;
use crate::domain::foundation::{CustomerId, Timestamp};

/// Everything produced for one interaction.
///
/// Built once, with every part supplied, after all collaborators have
/// succeeded. Fields are private so the value cannot be altered after
/// assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedExperienceResponse {
    customer_id: CustomerId,
    timestamp: Timestamp,
    profile: CustomerProfile,
    recommendations: Vec<ProductRecommendation>,
    content: PersonalizedContent,
    predictions: CustomerPredictions,
    strategy: EngagementStrategy,
    personalization_score: f64,
}

impl PersonalizedExperienceResponse {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: CustomerId,
        timestamp: Timestamp,
        profile: CustomerProfile,
        recommendations: Vec<ProductRecommendation>,
        content: PersonalizedContent,
        predictions: CustomerPredictions,
        strategy: EngagementStrategy,
        personalization_score: f64,
    ) -> Self {
        Self {
            customer_id,
            timestamp,
            profile,
            recommendations,
            content,
            predictions,
            strategy,
            personalization_score,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// When the response was assembled.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn profile(&self) -> &CustomerProfile {
        &self.profile
    }

    pub fn recommendations(&self) -> &[ProductRecommendation] {
        &self.recommendations
    }

    pub fn content(&self) -> &PersonalizedContent {
        &self.content
    }

    pub fn predictions(&self) -> &CustomerPredictions {
        &self.predictions
    }

    pub fn strategy(&self) -> &EngagementStrategy {
        &self.strategy
    }

    pub fn personalization_score(&self) -> f64 {
        self.personalization_score
    }
}
