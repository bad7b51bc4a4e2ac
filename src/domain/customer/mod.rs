//! Customer module - profile, lifecycle and interaction data.

mod interaction;
mod lifecycle;
mod message_analysis;
mod profile;

pub use interaction::CustomerInteractionData;
pub use lifecycle::LifecycleStage;
pub use message_analysis::{IntentScores, MessageAnalysis, SentimentScores};
pub use profile::{CustomerProfile, InteractionRecord, PurchaseRecord, PROFILE_FACET_COUNT};
