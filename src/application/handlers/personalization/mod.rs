//! Personalization application handlers.
//!
//! Turns a customer interaction into a personalized experience by
//! coordinating the profile updater and the three generators.

mod errors;
mod process_interaction;

pub use errors::{PersonalizationError, PersonalizationFailure, PipelineStage};
pub use process_interaction::{ProcessInteractionCommand, ProcessInteractionHandler};
