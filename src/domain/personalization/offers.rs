//! Offer planning - which incentives travel with a strategy.

use crate::domain::customer::{CustomerProfile, LifecycleStage};
use crate::domain::foundation::Timestamp;

use super::{CustomerPredictions, OfferType, PersonalizedOffer};

/// Lifetime value above which a customer is treated as VIP.
pub const VIP_LIFETIME_VALUE: f64 = 500.0;

/// Churn risk above which a retention incentive is attached.
pub const RETENTION_OFFER_CHURN_RISK: f64 = 0.5;

/// Maximum offers attached to one strategy.
pub const MAX_OFFERS: usize = 2;

/// Days an offer stays valid from issue.
pub const OFFER_VALIDITY_DAYS: i64 = 7;

/// Pure offer planner.
pub struct OfferPlanner;

impl OfferPlanner {
    /// Plans at most [`MAX_OFFERS`] offers, VIP first, then retention, then welcome.
    ///
    /// `issued_at` anchors validity so that the same inputs always produce
    /// the same offers.
    pub fn plan(
        profile: &CustomerProfile,
        predictions: &CustomerPredictions,
        issued_at: Timestamp,
    ) -> Vec<PersonalizedOffer> {
        let valid_until = issued_at.add_days(OFFER_VALIDITY_DAYS);
        let mut offers = Vec::with_capacity(MAX_OFFERS);

        if profile.predicted_lifetime_value > VIP_LIFETIME_VALUE {
            offers.push(PersonalizedOffer {
                offer_type: OfferType::VipDiscount,
                description: "Exclusive VIP 20% discount on premium items".to_string(),
                discount_percentage: 20.0,
                applicable_category: profile.top_preference().map(str::to_string),
                free_shipping: false,
                minimum_purchase: None,
                valid_until,
            });
        }

        if predictions.churn_risk > RETENTION_OFFER_CHURN_RISK {
            offers.push(PersonalizedOffer {
                offer_type: OfferType::RetentionOffer,
                description: "Special comeback offer just for you".to_string(),
                discount_percentage: 15.0,
                applicable_category: None,
                free_shipping: true,
                minimum_purchase: None,
                valid_until,
            });
        }

        if profile.lifecycle_stage == LifecycleStage::New {
            offers.push(PersonalizedOffer {
                offer_type: OfferType::WelcomeBonus,
                description: "Welcome! Get 10% off your first purchase".to_string(),
                discount_percentage: 10.0,
                applicable_category: None,
                free_shipping: false,
                minimum_purchase: Some(50.0),
                valid_until,
            });
        }

        offers.truncate(MAX_OFFERS);
        offers
    }
}
