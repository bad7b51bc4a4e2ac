//! ContentGenerator port - personalized copy for the current context.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::CustomerProfile;
use crate::domain::personalization::PersonalizedContent;

/// Errors raised by a content generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentGenerationError {
    /// A template could not be rendered.
    #[error("template rendering failed: {0}")]
    Template(String),

    /// The model or service behind the generator is unavailable.
    #[error("content service unavailable: {0}")]
    Unavailable(String),
}

/// Port for content generation.
///
/// Receives the interaction context already rendered as text
/// (see `CustomerInteractionData::context_summary`).
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_personalized_content(
        &self,
        profile: &CustomerProfile,
        context: &str,
    ) -> Result<PersonalizedContent, ContentGenerationError>;
}
