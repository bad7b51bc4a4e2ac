//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a customer, as issued by the commerce platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    /// Creates a CustomerId from the platform's numeric identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("customer_id", e.to_string()))
    }
}

/// Identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a storefront session (web, app, call centre).
///
/// Sessions are minted by the channel, so the value is opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an interaction recorded in a profile's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionId(Uuid);

impl InteractionId {
    /// Creates a new random InteractionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InteractionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InteractionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_parses_from_string() {
        let id: CustomerId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn customer_id_rejects_non_numeric_input() {
        let result = "abc".parse::<CustomerId>();
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "customer_id"),
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn customer_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&CustomerId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn session_id_rejects_blank_string() {
        let result = SessionId::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "session_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn session_id_preserves_value() {
        let id = SessionId::new("web-8f2c").unwrap();
        assert_eq!(id.as_str(), "web-8f2c");
    }

    #[test]
    fn interaction_id_roundtrips_through_string() {
        let id = InteractionId::new();
        let parsed: InteractionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn interaction_ids_are_unique() {
        assert_ne!(InteractionId::new(), InteractionId::new());
    }
}
