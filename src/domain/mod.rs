//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, attribute values, errors)
//! - `customer` - Customer profile, lifecycle stage and interaction data
//! - `personalization` - Recommendations, content, predictions, strategy, scoring

pub mod customer;
pub mod foundation;
pub mod personalization;
