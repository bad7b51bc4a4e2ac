//! Personalized content payload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeMap, Timestamp};

/// How pressing the content should feel to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

/// Copy and presentation hints generated for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedContent {
    pub content_type: String,
    pub title: String,
    pub description: String,
    pub emotional_tone: String,
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub dynamic_elements: AttributeMap,
    pub generated_at: Timestamp,
}
