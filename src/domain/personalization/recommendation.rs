//! Product recommendations produced by the recommendation generator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeMap, ProductId};

/// A ranked product suggestion.
///
/// `confidence_score` is expected in [0, 1] but is not clamped; the scorer
/// propagates whatever the producer supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub product_id: ProductId,
    pub product_name: String,
    pub category_id: String,
    pub price: f64,
    pub confidence_score: f64,
    pub reason: String,
    #[serde(default)]
    pub metadata: AttributeMap,
}

impl ProductRecommendation {
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        category_id: impl Into<String>,
        price: f64,
        confidence_score: f64,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            category_id: category_id.into(),
            price,
            confidence_score,
            reason: String::new(),
            metadata: AttributeMap::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}
