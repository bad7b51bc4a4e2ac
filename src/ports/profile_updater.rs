//! ProfileUpdater port - folds an interaction into a customer's profile.
//!
//! The updater owns profile storage. It is the only component allowed to
//! mutate a `CustomerProfile`, and it serializes concurrent updates for the
//! same customer. Callers receive an owned snapshot.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::{CustomerInteractionData, CustomerProfile};
use crate::domain::foundation::CustomerId;

/// Errors raised while updating a profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileUpdateError {
    /// The backing store failed.
    #[error("profile storage failure: {0}")]
    Storage(String),

    /// The interaction could not be applied to the profile.
    #[error("invalid interaction: {0}")]
    Validation(String),

    /// The customer is unknown and the updater does not create profiles.
    #[error("customer {0} not found")]
    NotFound(CustomerId),
}

/// Port for the profile store/updater.
#[async_trait]
pub trait ProfileUpdater: Send + Sync {
    /// Applies the interaction and returns the updated profile.
    async fn update_profile(
        &self,
        customer_id: CustomerId,
        interaction: &CustomerInteractionData,
    ) -> Result<CustomerProfile, ProfileUpdateError>;
}
