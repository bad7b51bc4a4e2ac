//! Strategy selection - ordered rule matching.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! | # | Condition                     | Strategy                  |
//! |---|-------------------------------|---------------------------|
//! | 1 | churn risk > 0.7              | `retention_campaign`      |
//! | 2 | purchase probability > 0.8    | `conversion_optimization` |
//! | 3 | lifecycle stage is `new`      | `onboarding_sequence`     |
//! | 4 | otherwise                     | `nurturing_campaign`      |
//!
//! Thresholds are strict, so a value sitting exactly on a threshold falls
//! through to the next rule.

use crate::domain::customer::{CustomerInteractionData, CustomerProfile, LifecycleStage};
use crate::domain::foundation::AttributeValue;

use super::{CustomerPredictions, EngagementStrategy, OfferPlanner, StrategyType};

pub const CHURN_RISK_THRESHOLD: f64 = 0.7;
pub const PURCHASE_PROBABILITY_THRESHOLD: f64 = 0.8;

/// Which rule produced a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyTrigger {
    ChurnRisk,
    PurchaseProbability,
    LifecycleStage,
    Default,
}

impl StrategyTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyTrigger::ChurnRisk => "churn_risk",
            StrategyTrigger::PurchaseProbability => "purchase_probability",
            StrategyTrigger::LifecycleStage => "lifecycle_stage",
            StrategyTrigger::Default => "default",
        }
    }
}

/// Pure, total strategy selection.
pub struct StrategySelector;

impl StrategySelector {
    /// Selects the engagement strategy for a customer.
    ///
    /// Always returns exactly one strategy. Offers are planned after the rule
    /// match and never influence which rule fires.
    pub fn select_strategy(
        profile: &CustomerProfile,
        predictions: &CustomerPredictions,
        interaction: &CustomerInteractionData,
    ) -> EngagementStrategy {
        debug_assert!(!predictions.churn_risk.is_nan(), "churn_risk must be a number");
        debug_assert!(
            !predictions.purchase_probability.is_nan(),
            "purchase_probability must be a number"
        );

        let (strategy_type, trigger) = Self::match_rule(
            predictions.churn_risk,
            predictions.purchase_probability,
            profile.lifecycle_stage,
        );

        let trigger_value = match trigger {
            StrategyTrigger::ChurnRisk => AttributeValue::Number(predictions.churn_risk),
            StrategyTrigger::PurchaseProbability => {
                AttributeValue::Number(predictions.purchase_probability)
            }
            StrategyTrigger::LifecycleStage | StrategyTrigger::Default => {
                AttributeValue::Text(profile.lifecycle_stage.as_str().to_string())
            }
        };

        let mut strategy = EngagementStrategy::of_type(strategy_type);
        strategy
            .parameters
            .insert("trigger".to_string(), trigger.as_str().into());
        strategy
            .parameters
            .insert("trigger_value".to_string(), trigger_value);
        strategy.parameters.insert(
            "next_best_action".to_string(),
            predictions.next_best_action.clone().into(),
        );
        strategy.offers = OfferPlanner::plan(profile, predictions, interaction.timestamp);
        strategy
    }

    /// The rule table itself, over the three inputs that drive it.
    pub fn match_rule(
        churn_risk: f64,
        purchase_probability: f64,
        stage: LifecycleStage,
    ) -> (StrategyType, StrategyTrigger) {
        if churn_risk > CHURN_RISK_THRESHOLD {
            return (StrategyType::RetentionCampaign, StrategyTrigger::ChurnRisk);
        }
        if purchase_probability > PURCHASE_PROBABILITY_THRESHOLD {
            return (
                StrategyType::ConversionOptimization,
                StrategyTrigger::PurchaseProbability,
            );
        }
        match stage {
            LifecycleStage::New => (StrategyType::OnboardingSequence, StrategyTrigger::LifecycleStage),
            LifecycleStage::Engaged
            | LifecycleStage::Loyal
            | LifecycleStage::Champion
            | LifecycleStage::AtRisk
            | LifecycleStage::Churned => (StrategyType::NurturingCampaign, StrategyTrigger::Default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, SessionId, Timestamp};
    use crate::domain::personalization::{EngagementChannel, EngagementTiming};
    use proptest::prelude::*;

    fn profile(stage: LifecycleStage) -> CustomerProfile {
        let mut profile = CustomerProfile::new(CustomerId::new(11), Timestamp::now());
        profile.lifecycle_stage = stage;
        profile
    }

    fn interaction() -> CustomerInteractionData {
        CustomerInteractionData::new(SessionId::new("s-1").unwrap(), "web", "page_view").unwrap()
    }

    fn select(churn: f64, purchase: f64, stage: LifecycleStage) -> EngagementStrategy {
        let predictions = CustomerPredictions::new(purchase, churn, 0.0, "engagement_nurturing");
        StrategySelector::select_strategy(&profile(stage), &predictions, &interaction())
    }

    #[test]
    fn scenario_high_churn_loyal_customer_gets_retention() {
        let strategy = select(0.9, 0.2, LifecycleStage::Loyal);
        assert_eq!(strategy.strategy_type, StrategyType::RetentionCampaign);
        assert_eq!(strategy.channel, EngagementChannel::EmailPhone);
        assert_eq!(strategy.timing, EngagementTiming::Immediate);
    }

    #[test]
    fn scenario_likely_buyer_gets_conversion() {
        let strategy = select(0.1, 0.95, LifecycleStage::Engaged);
        assert_eq!(strategy.strategy_type, StrategyType::ConversionOptimization);
        assert_eq!(strategy.channel, EngagementChannel::WebPush);
        assert_eq!(strategy.timing, EngagementTiming::Within24h);
    }

    #[test]
    fn scenario_new_customer_gets_onboarding() {
        let strategy = select(0.1, 0.1, LifecycleStage::New);
        assert_eq!(strategy.strategy_type, StrategyType::OnboardingSequence);
        assert_eq!(strategy.channel, EngagementChannel::Email);
        assert_eq!(strategy.timing, EngagementTiming::Progressive);
    }

    #[test]
    fn scenario_settled_customer_gets_nurturing() {
        let strategy = select(0.1, 0.1, LifecycleStage::Loyal);
        assert_eq!(strategy.strategy_type, StrategyType::NurturingCampaign);
        assert_eq!(strategy.channel, EngagementChannel::MultiChannel);
        assert_eq!(strategy.timing, EngagementTiming::Weekly);
    }

    #[test]
    fn churn_exactly_at_threshold_falls_through() {
        assert_eq!(
            select(0.7, 0.9, LifecycleStage::Loyal).strategy_type,
            StrategyType::ConversionOptimization
        );
        assert_eq!(
            select(0.7, 0.1, LifecycleStage::New).strategy_type,
            StrategyType::OnboardingSequence
        );
        assert_eq!(
            select(0.7, 0.1, LifecycleStage::Champion).strategy_type,
            StrategyType::NurturingCampaign
        );
    }

    #[test]
    fn purchase_exactly_at_threshold_falls_through() {
        assert_eq!(
            select(0.1, 0.8, LifecycleStage::New).strategy_type,
            StrategyType::OnboardingSequence
        );
    }

    #[test]
    fn churn_wins_over_purchase_regardless_of_magnitude() {
        assert_eq!(
            select(0.71, 0.99, LifecycleStage::New).strategy_type,
            StrategyType::RetentionCampaign
        );
    }

    #[test]
    fn parameters_record_the_trigger() {
        let strategy = select(0.85, 0.1, LifecycleStage::Loyal);
        assert_eq!(strategy.parameters["trigger"].as_str(), Some("churn_risk"));
        assert_eq!(strategy.parameters["trigger_value"].as_f64(), Some(0.85));
        assert_eq!(
            strategy.parameters["next_best_action"].as_str(),
            Some("engagement_nurturing")
        );

        let strategy = select(0.1, 0.1, LifecycleStage::New);
        assert_eq!(strategy.parameters["trigger"].as_str(), Some("lifecycle_stage"));
        assert_eq!(strategy.parameters["trigger_value"].as_str(), Some("new"));
    }

    #[test]
    fn retention_strategy_carries_retention_offer() {
        let strategy = select(0.9, 0.2, LifecycleStage::Loyal);
        assert!(strategy
            .offers
            .iter()
            .any(|o| o.offer_type == crate::domain::personalization::OfferType::RetentionOffer));
    }

    fn arb_stage() -> impl Strategy<Value = LifecycleStage> {
        prop_oneof![
            Just(LifecycleStage::New),
            Just(LifecycleStage::Engaged),
            Just(LifecycleStage::Loyal),
            Just(LifecycleStage::Champion),
            Just(LifecycleStage::AtRisk),
            Just(LifecycleStage::Churned),
        ]
    }

    proptest! {
        #[test]
        fn selection_follows_priority_order(
            churn in 0.0f64..=1.0,
            purchase in 0.0f64..=1.0,
            stage in arb_stage(),
        ) {
            let strategy = select(churn, purchase, stage);
            let expected = if churn > 0.7 {
                StrategyType::RetentionCampaign
            } else if purchase > 0.8 {
                StrategyType::ConversionOptimization
            } else if stage == LifecycleStage::New {
                StrategyType::OnboardingSequence
            } else {
                StrategyType::NurturingCampaign
            };
            prop_assert_eq!(strategy.strategy_type, expected);
            prop_assert_eq!(strategy.channel, expected.channel());
            prop_assert_eq!(strategy.timing, expected.timing());
        }

        #[test]
        fn selection_is_deterministic(
            churn in 0.0f64..=1.0,
            purchase in 0.0f64..=1.0,
            stage in arb_stage(),
        ) {
            let interaction = interaction();
            let predictions = CustomerPredictions::new(purchase, churn, 0.0, "x");
            let profile = profile(stage);
            let first = StrategySelector::select_strategy(&profile, &predictions, &interaction);
            let second = StrategySelector::select_strategy(&profile, &predictions, &interaction);
            prop_assert_eq!(first, second);
        }
    }
}
