//! Interaction data supplied by a channel for one orchestration run.

use serde::{Deserialize, Serialize};

use super::MessageAnalysis;
use crate::domain::foundation::{
    render_map, AttributeMap, AttributeValue, ProductId, SessionId, Timestamp, ValidationError,
};

/// What the customer just did, as reported by the channel.
///
/// Immutable once constructed; generators receive it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInteractionData {
    pub session_id: SessionId,
    pub channel: String,
    pub interaction_type: String,
    #[serde(default)]
    pub context: AttributeMap,
    #[serde(default)]
    pub user_message: Option<String>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default = "Timestamp::now")]
    pub timestamp: Timestamp,
}

impl CustomerInteractionData {
    /// Creates interaction data stamped with the current time.
    pub fn new(
        session_id: SessionId,
        channel: impl Into<String>,
        interaction_type: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let channel = channel.into();
        let interaction_type = interaction_type.into();
        if channel.trim().is_empty() {
            return Err(ValidationError::empty_field("channel"));
        }
        if interaction_type.trim().is_empty() {
            return Err(ValidationError::empty_field("interaction_type"));
        }
        Ok(Self {
            session_id,
            channel,
            interaction_type,
            context: AttributeMap::new(),
            user_message: None,
            product_id: None,
            category_id: None,
            timestamp: Timestamp::now(),
        })
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    pub fn with_product(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sentiment and intent of the attached message, if any.
    pub fn message_analysis(&self) -> Option<MessageAnalysis> {
        self.user_message.as_deref().map(MessageAnalysis::analyze)
    }

    /// Context rendered as text for the content generator.
    ///
    /// Empty string when there is no context, otherwise `{k=v, ...}` in key order.
    pub fn context_summary(&self) -> String {
        if self.context.is_empty() {
            String::new()
        } else {
            render_map(&self.context)
        }
    }
}
