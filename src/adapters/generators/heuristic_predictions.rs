//! Rule-based prediction generator.
//!
//! Derives predictions from behavior counters, the risk and value figures
//! the profile updater already maintains, and the sentiment and intent of the
//! customer's message.

use async_trait::async_trait;

use crate::domain::customer::{CustomerInteractionData, CustomerProfile, LifecycleStage};
use crate::domain::personalization::CustomerPredictions;
use crate::ports::{PredictionError, PredictionGenerator};

/// Interaction types that signal buying intent.
pub const PURCHASE_SIGNALS: [&str; 3] = ["purchase", "add_to_cart", "checkout"];

const BASE_PURCHASE_PROBABILITY: f64 = 0.1;
const PURCHASE_SIGNAL_WEIGHT: f64 = 0.15;
const ESCALATION_NEGATIVE_SENTIMENT: f64 = 0.6;
const SHOWCASE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPredictionGenerator;

impl HeuristicPredictionGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Message-derived inputs to the next-best-action rules.
#[derive(Debug, Clone, Copy, Default)]
struct MessageSignals {
    negative_sentiment: f64,
    purchase_intent: f64,
}

fn next_best_action(
    churn_risk: f64,
    purchase_probability: f64,
    signals: MessageSignals,
    stage: LifecycleStage,
) -> &'static str {
    if churn_risk > 0.7 {
        "retention_campaign"
    } else if signals.negative_sentiment > ESCALATION_NEGATIVE_SENTIMENT {
        "customer_service_escalation"
    } else if signals.purchase_intent > SHOWCASE_THRESHOLD || purchase_probability > SHOWCASE_THRESHOLD {
        "personalized_product_showcase"
    } else if stage == LifecycleStage::New {
        "onboarding_experience"
    } else {
        "engagement_nurturing"
    }
}

#[async_trait]
impl PredictionGenerator for HeuristicPredictionGenerator {
    async fn generate_predictions(
        &self,
        profile: &CustomerProfile,
        interaction: &CustomerInteractionData,
    ) -> Result<CustomerPredictions, PredictionError> {
        let analysis = interaction.message_analysis();
        let message = MessageSignals {
            negative_sentiment: analysis
                .map_or(profile.sentiment.negative, |a| a.sentiment.negative),
            purchase_intent: analysis.map_or(0.0, |a| a.intent.purchase),
        };

        let signals = profile.behavior_count(&PURCHASE_SIGNALS);
        let purchase_probability =
            (BASE_PURCHASE_PROBABILITY + PURCHASE_SIGNAL_WEIGHT * signals as f64).min(1.0);
        let churn_risk = profile.churn_risk;

        let mut predictions = CustomerPredictions::new(
            purchase_probability,
            churn_risk,
            profile.predicted_lifetime_value,
            next_best_action(churn_risk, purchase_probability, message, profile.lifecycle_stage),
        );
        predictions.predicted_categories = profile
            .top_preferences(3)
            .into_iter()
            .map(|(category, _)| category.to_string())
            .collect();
        predictions
            .behavior_predictions
            .insert("purchase_signals".to_string(), signals as f64);
        if let Some(analysis) = analysis {
            let intents = &mut predictions.behavior_predictions;
            intents.insert("purchase_intent".to_string(), analysis.intent.purchase);
            intents.insert("research_intent".to_string(), analysis.intent.research);
            intents.insert("support_intent".to_string(), analysis.intent.support);
            intents.insert("browsing_intent".to_string(), analysis.intent.browsing);
        }

        Ok(predictions)
    }
}
