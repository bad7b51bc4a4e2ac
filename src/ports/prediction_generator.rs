//! PredictionGenerator port - behavioral predictions for a customer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::{CustomerInteractionData, CustomerProfile};
use crate::domain::personalization::CustomerPredictions;

/// Errors raised by a prediction generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// The profile does not carry enough signal to predict from.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// The model or service behind the generator is unavailable.
    #[error("prediction service unavailable: {0}")]
    Unavailable(String),
}

/// Port for predictive analytics.
#[async_trait]
pub trait PredictionGenerator: Send + Sync {
    async fn generate_predictions(
        &self,
        profile: &CustomerProfile,
        interaction: &CustomerInteractionData,
    ) -> Result<CustomerPredictions, PredictionError>;
}
