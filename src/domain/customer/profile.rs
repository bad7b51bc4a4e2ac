//! CustomerProfile - what we know about a customer.
//!
//! The profile is owned and mutated by the profile updater. Everything
//! downstream of it (generators, scorer, strategy selector) reads a
//! snapshot and never writes back.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{LifecycleStage, SentimentScores};
use crate::domain::foundation::{AttributeMap, CustomerId, InteractionId, ProductId, Timestamp};

/// Number of profile facets considered when measuring completeness.
pub const PROFILE_FACET_COUNT: usize = 5;

/// A past order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub order_id: u64,
    pub product_ids: Vec<ProductId>,
    pub total_amount: f64,
    pub purchased_at: Timestamp,
}

/// A past interaction, as recorded by the profile updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub interaction_id: InteractionId,
    pub interaction_type: String,
    pub channel: String,
    #[serde(default)]
    pub details: AttributeMap,
    pub recorded_at: Timestamp,
}

/// Aggregated view of a single customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub demographics: AttributeMap,
    /// Category or attribute name to affinity weight, conceptually in [0, 1].
    #[serde(default)]
    pub preferences: BTreeMap<String, f64>,
    /// Interaction type to occurrence count.
    #[serde(default)]
    pub behavior_patterns: BTreeMap<String, u32>,
    #[serde(default)]
    pub personality_traits: BTreeMap<String, f64>,
    #[serde(default)]
    pub purchase_history: Vec<PurchaseRecord>,
    #[serde(default)]
    pub interaction_history: Vec<InteractionRecord>,
    #[serde(default)]
    pub lifecycle_stage: LifecycleStage,
    #[serde(default)]
    pub predicted_lifetime_value: f64,
    #[serde(default)]
    pub churn_risk: f64,
    /// Sentiment of the most recent customer message.
    #[serde(default)]
    pub sentiment: SentimentScores,
    pub last_updated: Timestamp,
}

impl CustomerProfile {
    /// Creates an empty profile in the `new` stage.
    pub fn new(customer_id: CustomerId, now: Timestamp) -> Self {
        Self {
            customer_id,
            demographics: AttributeMap::new(),
            preferences: BTreeMap::new(),
            behavior_patterns: BTreeMap::new(),
            personality_traits: BTreeMap::new(),
            purchase_history: Vec::new(),
            interaction_history: Vec::new(),
            lifecycle_stage: LifecycleStage::New,
            predicted_lifetime_value: 0.0,
            churn_risk: 0.0,
            sentiment: SentimentScores::default(),
            last_updated: now,
        }
    }

    /// Counts the non-empty facets among demographics, preferences,
    /// behavior patterns, personality traits and purchase history.
    ///
    /// Interaction history is deliberately not a facet.
    pub fn populated_facet_count(&self) -> usize {
        [
            !self.demographics.is_empty(),
            !self.preferences.is_empty(),
            !self.behavior_patterns.is_empty(),
            !self.personality_traits.is_empty(),
            !self.purchase_history.is_empty(),
        ]
        .iter()
        .filter(|populated| **populated)
        .count()
    }

    /// Up to `n` preferences, highest weight first, ties by name.
    pub fn top_preferences(&self, n: usize) -> Vec<(&str, f64)> {
        let mut prefs: Vec<(&str, f64)> = self
            .preferences
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
            .collect();
        prefs.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        prefs.truncate(n);
        prefs
    }

    /// The single highest-weight preference, if any.
    pub fn top_preference(&self) -> Option<&str> {
        self.top_preferences(1).first().map(|(name, _)| *name)
    }

    /// The highest-scoring personality trait, ties by name.
    pub fn dominant_trait(&self) -> Option<&str> {
        self.personality_traits
            .iter()
            .max_by(|a, b| {
                a.1.partial_cmp(b.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.0.cmp(a.0))
            })
            .map(|(name, _)| name.as_str())
    }

    /// Trait score, or `default` if the trait has not been inferred.
    pub fn trait_or(&self, name: &str, default: f64) -> f64 {
        self.personality_traits.get(name).copied().unwrap_or(default)
    }

    /// Sum of behavior counters for the given interaction types.
    ///
    /// Widened to `u64` so that counters near `u32::MAX` add up without
    /// overflowing.
    pub fn behavior_count(&self, interaction_types: &[&str]) -> u64 {
        interaction_types
            .iter()
            .filter_map(|t| self.behavior_patterns.get(*t))
            .fold(0u64, |total, count| total.saturating_add(u64::from(*count)))
    }
}
