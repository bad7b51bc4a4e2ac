//! Engagement strategy value types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AttributeMap, Timestamp};

/// The fixed set of engagement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    RetentionCampaign,
    ConversionOptimization,
    OnboardingSequence,
    NurturingCampaign,
}

impl StrategyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::RetentionCampaign => "retention_campaign",
            StrategyType::ConversionOptimization => "conversion_optimization",
            StrategyType::OnboardingSequence => "onboarding_sequence",
            StrategyType::NurturingCampaign => "nurturing_campaign",
        }
    }

    /// Channel the strategy is delivered through.
    pub fn channel(&self) -> EngagementChannel {
        match self {
            StrategyType::RetentionCampaign => EngagementChannel::EmailPhone,
            StrategyType::ConversionOptimization => EngagementChannel::WebPush,
            StrategyType::OnboardingSequence => EngagementChannel::Email,
            StrategyType::NurturingCampaign => EngagementChannel::MultiChannel,
        }
    }

    /// Cadence the strategy runs on.
    pub fn timing(&self) -> EngagementTiming {
        match self {
            StrategyType::RetentionCampaign => EngagementTiming::Immediate,
            StrategyType::ConversionOptimization => EngagementTiming::Within24h,
            StrategyType::OnboardingSequence => EngagementTiming::Progressive,
            StrategyType::NurturingCampaign => EngagementTiming::Weekly,
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementChannel {
    EmailPhone,
    WebPush,
    Email,
    MultiChannel,
}

impl EngagementChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementChannel::EmailPhone => "email_phone",
            EngagementChannel::WebPush => "web_push",
            EngagementChannel::Email => "email",
            EngagementChannel::MultiChannel => "multi_channel",
        }
    }
}

impl fmt::Display for EngagementChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTiming {
    Immediate,
    #[serde(rename = "within_24h")]
    Within24h,
    Progressive,
    Weekly,
}

impl EngagementTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementTiming::Immediate => "immediate",
            EngagementTiming::Within24h => "within_24h",
            EngagementTiming::Progressive => "progressive",
            EngagementTiming::Weekly => "weekly",
        }
    }
}

impl fmt::Display for EngagementTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    VipDiscount,
    RetentionOffer,
    WelcomeBonus,
}

/// An incentive attached to a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedOffer {
    pub offer_type: OfferType,
    pub description: String,
    pub discount_percentage: f64,
    pub applicable_category: Option<String>,
    #[serde(default)]
    pub free_shipping: bool,
    pub minimum_purchase: Option<f64>,
    pub valid_until: Timestamp,
}

/// How, where and when to engage the customer next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementStrategy {
    pub strategy_type: StrategyType,
    pub channel: EngagementChannel,
    pub timing: EngagementTiming,
    #[serde(default)]
    pub parameters: AttributeMap,
    #[serde(default)]
    pub offers: Vec<PersonalizedOffer>,
}

impl EngagementStrategy {
    /// Strategy with the channel and timing that belong to `strategy_type`.
    pub fn of_type(strategy_type: StrategyType) -> Self {
        Self {
            strategy_type,
            channel: strategy_type.channel(),
            timing: strategy_type.timing(),
            parameters: AttributeMap::new(),
            offers: Vec::new(),
        }
    }
}
