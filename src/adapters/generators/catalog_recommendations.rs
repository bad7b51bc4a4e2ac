//! Catalog-backed recommendation generator.
//!
//! Ranks a fixed product list by how much the customer likes each product's
//! category.

use async_trait::async_trait;
use std::cmp::Ordering;

use crate::domain::customer::{CustomerInteractionData, CustomerProfile};
use crate::domain::foundation::ProductId;
use crate::domain::personalization::ProductRecommendation;
use crate::ports::{RecommendationError, RecommendationGenerator};

/// Default number of recommendations returned.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// A product the generator can recommend.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub product_id: ProductId,
    pub name: String,
    pub category_id: String,
    pub price: f64,
}

impl CatalogProduct {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        category_id: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            category_id: category_id.into(),
            price,
        }
    }
}

/// Preference-weighted catalog ranking.
#[derive(Debug, Clone)]
pub struct CatalogRecommendationGenerator {
    catalog: Vec<CatalogProduct>,
    limit: usize,
}

impl CatalogRecommendationGenerator {
    pub fn new(catalog: Vec<CatalogProduct>) -> Self {
        Self {
            catalog,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[async_trait]
impl RecommendationGenerator for CatalogRecommendationGenerator {
    async fn generate_recommendations(
        &self,
        profile: &CustomerProfile,
        interaction: &CustomerInteractionData,
    ) -> Result<Vec<ProductRecommendation>, RecommendationError> {
        if self.catalog.is_empty() {
            return Err(RecommendationError::EmptyCatalog);
        }

        let mut ranked: Vec<ProductRecommendation> = self
            .catalog
            .iter()
            .filter(|product| interaction.product_id != Some(product.product_id))
            .map(|product| {
                let weight = profile
                    .preferences
                    .get(&product.category_id)
                    .copied()
                    .unwrap_or(0.0);
                ProductRecommendation::new(
                    product.product_id,
                    product.name.clone(),
                    product.category_id.clone(),
                    product.price,
                    weight.clamp(0.0, 1.0),
                )
                .with_reason(format!("Matches your interest in {}", product.category_id))
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.confidence_score
                .partial_cmp(&a.confidence_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        ranked.truncate(self.limit);

        Ok(ranked)
    }
}
