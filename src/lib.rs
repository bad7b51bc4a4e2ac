//! Personalization Engine - per-interaction customer experience orchestration
//!
//! Each customer interaction flows through one pipeline:
//! the customer profile is updated, recommendations, content and predictions
//! are generated concurrently from that profile, an engagement strategy is
//! chosen and the result is scored. Collaborators sit behind async ports so
//! that stores and models can be swapped without touching the pipeline.
//!
//! - `domain` - pure types and rules (profile, strategy selection, scoring)
//! - `ports` - collaborator contracts
//! - `application` - the orchestrating handler and its error type
//! - `adapters` - in-process heuristic implementations of the ports
//! - `config` - environment-driven configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
