//! Adapters - Implementations of port interfaces.
//!
//! - `profile` - In-memory profile store and updater
//! - `generators` - Heuristic recommendation, content and prediction generators

pub mod generators;
pub mod profile;

pub use generators::{
    CatalogProduct, CatalogRecommendationGenerator, HeuristicPredictionGenerator,
    TemplateContentGenerator,
};
pub use profile::InMemoryProfileUpdater;
