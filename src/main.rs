//! personalization-engine demo binary.
//!
//! Wires the in-process adapters into the orchestrator, runs one sample
//! interaction through it and prints the resulting experience as JSON.
//!
//! # Environment Variables
//!
//! - `PERSONALIZATION__ORCHESTRATOR__GENERATOR_TIMEOUT_MS` - per-generator timeout
//! - `PERSONALIZATION__TELEMETRY__FORMAT` - `pretty` (default) or `json`
//! - `RUST_LOG` - tracing filter, overrides the configured level

use std::sync::Arc;

use personalization_engine::adapters::{
    CatalogProduct, CatalogRecommendationGenerator, HeuristicPredictionGenerator,
    InMemoryProfileUpdater, TemplateContentGenerator,
};
use personalization_engine::application::ProcessInteractionHandler;
use personalization_engine::config::{init_tracing, AppConfig};
use personalization_engine::domain::customer::CustomerInteractionData;
use personalization_engine::domain::foundation::{CustomerId, DomainError, ProductId, SessionId};

fn demo_catalog() -> Vec<CatalogProduct> {
    vec![
        CatalogProduct::new(ProductId::new(101), "Noise-cancelling headphones", "electronics", 249.0),
        CatalogProduct::new(ProductId::new(102), "Smart watch", "electronics", 199.0),
        CatalogProduct::new(ProductId::new(201), "Merino sweater", "clothing", 89.0),
        CatalogProduct::new(ProductId::new(301), "Field guide to birds", "books", 24.5),
        CatalogProduct::new(ProductId::new(401), "Raised garden bed", "home_garden", 139.0),
        CatalogProduct::new(ProductId::new(501), "Trail running shoes", "sports", 129.0),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.telemetry);

    let handler = ProcessInteractionHandler::new(
        Arc::new(InMemoryProfileUpdater::new()),
        Arc::new(CatalogRecommendationGenerator::new(demo_catalog())),
        Arc::new(TemplateContentGenerator::new()),
        Arc::new(HeuristicPredictionGenerator::new()),
    )
    .with_config(config.orchestrator.clone());

    let interaction = CustomerInteractionData::new(SessionId::new("demo-session")?, "web", "product_view")?
        .with_product(ProductId::new(102))
        .with_category("electronics")
        .with_context("page", "product_detail")
        .with_context("referrer", "newsletter");

    tracing::info!("Running sample interaction through the personalization pipeline");

    let response = handler
        .process_interaction(CustomerId::new(1001), &interaction)
        .await
        .map_err(DomainError::from)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
