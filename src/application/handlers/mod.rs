//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod personalization;

pub use personalization::{
    PersonalizationError, PersonalizationFailure, PipelineStage, ProcessInteractionCommand,
    ProcessInteractionHandler,
};
