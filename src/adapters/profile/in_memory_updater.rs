//! In-Memory Profile Updater Adapter
//!
//! Keeps customer profiles in process memory and folds each interaction into
//! them with simple heuristics. Useful for development, demos and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::customer::{CustomerInteractionData, CustomerProfile, InteractionRecord, LifecycleStage};
use crate::domain::foundation::{CustomerId, InteractionId, Timestamp};
use crate::domain::personalization::round_half_up;
use crate::ports::{ProfileUpdateError, ProfileUpdater};

/// Preference weights given to a customer seen for the first time.
pub const DEFAULT_PREFERENCES: [(&str, f64); 5] = [
    ("electronics", 0.3),
    ("clothing", 0.3),
    ("books", 0.2),
    ("home_garden", 0.2),
    ("sports", 0.2),
];

/// Preference bump applied when an interaction touches a known category.
pub const PREFERENCE_STEP: f64 = 0.05;

const BASE_LIFETIME_VALUE: f64 = 100.0;
const LIFETIME_VALUE_PER_INTERACTION: f64 = 5.0;
const NEUTRAL_TRAIT: f64 = 0.5;
const NEGATIVE_SENTIMENT_WEIGHT: f64 = 0.2;

/// In-memory profile store implementing [`ProfileUpdater`].
///
/// Updates are serialized through the write lock, so two interactions for
/// the same customer never interleave.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileUpdater {
    profiles: Arc<RwLock<HashMap<CustomerId, CustomerProfile>>>,
}

impl InMemoryProfileUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs (or replaces) a profile.
    pub async fn seed(&self, profile: CustomerProfile) {
        self.profiles.write().await.insert(profile.customer_id, profile);
    }

    /// Snapshot of a stored profile.
    pub async fn get(&self, customer_id: CustomerId) -> Option<CustomerProfile> {
        self.profiles.read().await.get(&customer_id).cloned()
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileUpdater for InMemoryProfileUpdater {
    async fn update_profile(
        &self,
        customer_id: CustomerId,
        interaction: &CustomerInteractionData,
    ) -> Result<CustomerProfile, ProfileUpdateError> {
        if interaction.interaction_type.trim().is_empty() {
            return Err(ProfileUpdateError::Validation(
                "interaction_type must not be empty".to_string(),
            ));
        }

        let now = interaction.timestamp;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(customer_id)
            .or_insert_with(|| new_customer_profile(customer_id, now));

        apply_interaction(profile, interaction, now);

        debug!(
            customer_id = %customer_id,
            lifecycle_stage = %profile.lifecycle_stage,
            churn_risk = profile.churn_risk,
            "Profile folded interaction"
        );

        Ok(profile.clone())
    }
}

fn new_customer_profile(customer_id: CustomerId, now: Timestamp) -> CustomerProfile {
    let mut profile = CustomerProfile::new(customer_id, now);
    profile.preferences = DEFAULT_PREFERENCES
        .iter()
        .map(|(category, weight)| (category.to_string(), *weight))
        .collect();
    profile
}

fn apply_interaction(profile: &mut CustomerProfile, interaction: &CustomerInteractionData, now: Timestamp) {
    let mut details = interaction.context.clone();
    if let Some(product_id) = interaction.product_id {
        details.insert("product_id".to_string(), product_id.to_string().into());
    }
    if let Some(category) = &interaction.category_id {
        details.insert("category_id".to_string(), category.as_str().into());
    }

    profile.interaction_history.push(InteractionRecord {
        interaction_id: InteractionId::new(),
        interaction_type: interaction.interaction_type.clone(),
        channel: interaction.channel.clone(),
        details,
        recorded_at: now,
    });

    let count = profile
        .behavior_patterns
        .entry(interaction.interaction_type.clone())
        .or_insert(0);
    *count = count.saturating_add(1);

    if let Some(weight) = interaction
        .category_id
        .as_ref()
        .and_then(|category| profile.preferences.get_mut(category))
    {
        *weight = (*weight + PREFERENCE_STEP).min(1.0);
    }

    let interactions = profile.interaction_history.len();
    profile.lifecycle_stage = next_stage(profile.lifecycle_stage, interactions);

    if let Some(analysis) = interaction.message_analysis() {
        profile.sentiment = analysis.sentiment;
    }

    let days_idle = now.days_since(&profile.last_updated);
    profile.churn_risk = churn_risk(days_idle, interactions, profile.sentiment.negative);
    profile.predicted_lifetime_value = lifetime_value(profile, interactions);
    profile.last_updated = now;
}

/// Count-based stage, except that a declining stage set elsewhere sticks
/// until the count alone would lift the customer past `new`.
fn next_stage(current: LifecycleStage, interactions: usize) -> LifecycleStage {
    let by_count = LifecycleStage::from_interaction_count(interactions);
    if current.is_declining() && by_count == LifecycleStage::New {
        current
    } else {
        by_count
    }
}

/// Recency risk, offset by engagement and raised by negative sentiment.
fn churn_risk(days_idle: i64, interactions: usize, negative_sentiment: f64) -> f64 {
    let recency = (days_idle as f64 / 30.0).min(0.9);
    let per_day = interactions as f64 / days_idle.max(1) as f64;
    let engagement = (0.1 * per_day).min(0.3);
    let sentiment = NEGATIVE_SENTIMENT_WEIGHT * negative_sentiment;
    (recency - engagement + sentiment).clamp(0.0, 1.0)
}

fn lifetime_value(profile: &CustomerProfile, interactions: usize) -> f64 {
    let base = BASE_LIFETIME_VALUE + LIFETIME_VALUE_PER_INTERACTION * interactions as f64;
    let personality = 0.5 * profile.trait_or("conscientiousness", NEUTRAL_TRAIT)
        + 0.3 * profile.trait_or("openness", NEUTRAL_TRAIT)
        + 0.2;
    round_half_up(base * profile.lifecycle_stage.value_multiplier() * personality, 2)
}
