//! In-process generator adapters.
//!
//! Heuristic stand-ins for the recommendation, content and prediction
//! services.

mod catalog_recommendations;
mod heuristic_predictions;
mod template_content;

pub use catalog_recommendations::{
    CatalogProduct, CatalogRecommendationGenerator, DEFAULT_RECOMMENDATION_LIMIT,
};
pub use heuristic_predictions::{HeuristicPredictionGenerator, PURCHASE_SIGNALS};
pub use template_content::TemplateContentGenerator;
