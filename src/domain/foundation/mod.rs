//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the personalization domain.

mod attribute;
mod errors;
mod ids;
mod timestamp;

pub use attribute::{render_map, AttributeMap, AttributeValue};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CustomerId, InteractionId, ProductId, SessionId};
pub use timestamp::Timestamp;
