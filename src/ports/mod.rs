//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the orchestration core and the services it coordinates. Adapters
//! implement these ports.
//!
//! - `ProfileUpdater` - owns and mutates customer profiles
//! - `RecommendationGenerator` - ranked product recommendations
//! - `ContentGenerator` - personalized content payloads
//! - `PredictionGenerator` - purchase/churn/value predictions

mod content_generator;
mod prediction_generator;
mod profile_updater;
mod recommendation_generator;

pub use content_generator::{ContentGenerationError, ContentGenerator};
pub use prediction_generator::{PredictionError, PredictionGenerator};
pub use profile_updater::{ProfileUpdateError, ProfileUpdater};
pub use recommendation_generator::{RecommendationError, RecommendationGenerator};
