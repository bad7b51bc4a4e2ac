//! Personalization module - generated artifacts and the pure rules that
//! combine them.
//!
//! - `PersonalizationScorer` - completeness + confidence score
//! - `StrategySelector` - ordered rule matching to an engagement strategy
//! - `OfferPlanner` - incentives attached to the selected strategy

mod content;
mod offers;
mod predictions;
mod recommendation;
mod response;
mod scorer;
mod strategy;
mod strategy_selector;

pub use content::{PersonalizedContent, UrgencyLevel};
pub use offers::{OfferPlanner, MAX_OFFERS, OFFER_VALIDITY_DAYS};
pub use predictions::CustomerPredictions;
pub use recommendation::ProductRecommendation;
pub use response::PersonalizedExperienceResponse;
pub use scorer::{round_half_up, PersonalizationScorer};
pub use strategy::{
    EngagementChannel, EngagementStrategy, EngagementTiming, OfferType, PersonalizedOffer,
    StrategyType,
};
pub use strategy_selector::{
    StrategySelector, StrategyTrigger, CHURN_RISK_THRESHOLD, PURCHASE_PROBABILITY_THRESHOLD,
};
