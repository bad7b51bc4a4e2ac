//! Error boundary for the personalization pipeline.
//!
//! Every collaborator failure, whatever its origin, leaves the handler as a
//! single [`PersonalizationError`] carrying the customer id, the stage that
//! failed and the original cause.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{CustomerId, DomainError, ErrorCode};
use crate::ports::{ContentGenerationError, PredictionError, ProfileUpdateError, RecommendationError};

/// Pipeline step a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    ProfileUpdate,
    Recommendations,
    Content,
    Predictions,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::ProfileUpdate => "profile_update",
            PipelineStage::Recommendations => "recommendations",
            PipelineStage::Content => "content",
            PipelineStage::Predictions => "predictions",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The underlying cause of a pipeline failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersonalizationFailure {
    #[error(transparent)]
    ProfileUpdate(#[from] ProfileUpdateError),

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    #[error(transparent)]
    ContentGeneration(#[from] ContentGenerationError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("{stage} timed out after {timeout_ms}ms")]
    Timeout { stage: PipelineStage, timeout_ms: u64 },
}

impl PersonalizationFailure {
    /// The stage this failure belongs to.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PersonalizationFailure::ProfileUpdate(_) => PipelineStage::ProfileUpdate,
            PersonalizationFailure::Recommendation(_) => PipelineStage::Recommendations,
            PersonalizationFailure::ContentGeneration(_) => PipelineStage::Content,
            PersonalizationFailure::Prediction(_) => PipelineStage::Predictions,
            PersonalizationFailure::Timeout { stage, .. } => *stage,
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            PersonalizationFailure::ProfileUpdate(ProfileUpdateError::NotFound(_)) => {
                ErrorCode::CustomerNotFound
            }
            PersonalizationFailure::ProfileUpdate(_) => ErrorCode::ProfileUpdateFailed,
            PersonalizationFailure::Recommendation(_) => ErrorCode::RecommendationFailed,
            PersonalizationFailure::ContentGeneration(_) => ErrorCode::ContentGenerationFailed,
            PersonalizationFailure::Prediction(_) => ErrorCode::PredictionFailed,
            PersonalizationFailure::Timeout { .. } => ErrorCode::Timeout,
        }
    }
}

/// The single error returned by the personalization pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to personalize experience for customer {customer_id} at {stage}")]
pub struct PersonalizationError {
    pub customer_id: CustomerId,
    pub stage: PipelineStage,
    #[source]
    pub source: PersonalizationFailure,
}

impl PersonalizationError {
    pub fn new(customer_id: CustomerId, source: impl Into<PersonalizationFailure>) -> Self {
        let source = source.into();
        Self {
            customer_id,
            stage: source.stage(),
            source,
        }
    }

    /// Error code of the underlying failure.
    pub fn code(&self) -> ErrorCode {
        self.source.code()
    }
}

impl From<PersonalizationError> for DomainError {
    fn from(err: PersonalizationError) -> Self {
        DomainError::new(ErrorCode::PersonalizationFailed, err.to_string())
            .with_detail("customer_id", err.customer_id.to_string())
            .with_detail("stage", err.stage.as_str())
            .with_detail("cause_code", err.code().to_string())
            .with_detail("cause", err.source.to_string())
    }
}
