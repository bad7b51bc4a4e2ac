//! Application layer - commands and their handlers.
//!
//! This layer sequences domain operations and coordinates between ports.
//! It owns no state of its own.

pub mod handlers;

pub use handlers::{
    PersonalizationError, PersonalizationFailure, PipelineStage, ProcessInteractionCommand,
    ProcessInteractionHandler,
};
