//! ProcessInteraction - assembles a personalized experience for one interaction.
//!
//! Pipeline:
//! 1. Profile update (must finish before anything else starts)
//! 2. Recommendations, content and predictions, concurrently, all from the
//!    freshly updated profile
//! 3. Strategy selection and scoring over the joined results
//! 4. Response assembly
//!
//! Any failure aborts the request. The concurrent join is fail-fast: the
//! first generator error drops the remaining in-flight calls, and no partial
//! response is ever produced.

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use super::errors::{PersonalizationError, PersonalizationFailure, PipelineStage};
use crate::config::OrchestratorConfig;
use crate::domain::customer::CustomerInteractionData;
use crate::domain::foundation::{CustomerId, Timestamp};
use crate::domain::personalization::{
    PersonalizationScorer, PersonalizedExperienceResponse, StrategySelector,
};
use crate::ports::{ContentGenerator, PredictionGenerator, ProfileUpdater, RecommendationGenerator};

/// Command to personalize the experience for one interaction.
#[derive(Debug, Clone)]
pub struct ProcessInteractionCommand {
    pub customer_id: CustomerId,
    pub interaction: CustomerInteractionData,
}

/// Orchestrates the collaborators into a single response.
///
/// Stateless across calls; all per-request data lives on the stack of
/// [`ProcessInteractionHandler::process_interaction`].
pub struct ProcessInteractionHandler {
    profile_updater: Arc<dyn ProfileUpdater>,
    recommendation_generator: Arc<dyn RecommendationGenerator>,
    content_generator: Arc<dyn ContentGenerator>,
    prediction_generator: Arc<dyn PredictionGenerator>,
    config: OrchestratorConfig,
}

impl ProcessInteractionHandler {
    pub fn new(
        profile_updater: Arc<dyn ProfileUpdater>,
        recommendation_generator: Arc<dyn RecommendationGenerator>,
        content_generator: Arc<dyn ContentGenerator>,
        prediction_generator: Arc<dyn PredictionGenerator>,
    ) -> Self {
        Self {
            profile_updater,
            recommendation_generator,
            content_generator,
            prediction_generator,
            config: OrchestratorConfig::default(),
        }
    }

    /// Replaces the default timeouts and batch limits.
    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn handle(
        &self,
        cmd: ProcessInteractionCommand,
    ) -> Result<PersonalizedExperienceResponse, PersonalizationError> {
        self.process_interaction(cmd.customer_id, &cmd.interaction).await
    }

    /// Processes many interactions, at most `batch_concurrency` at a time.
    ///
    /// Results come back in input order. Requests are independent: one
    /// failure does not affect the others.
    pub async fn handle_batch(
        &self,
        commands: Vec<ProcessInteractionCommand>,
    ) -> Vec<Result<PersonalizedExperienceResponse, PersonalizationError>> {
        let concurrency = self.config.batch_concurrency.max(1);
        debug!(
            requests = commands.len(),
            concurrency, "Processing interaction batch"
        );

        stream::iter(commands)
            .map(|cmd| self.handle(cmd))
            .buffered(concurrency)
            .collect()
            .await
    }

    /// Runs the full pipeline for one customer interaction.
    pub async fn process_interaction(
        &self,
        customer_id: CustomerId,
        interaction: &CustomerInteractionData,
    ) -> Result<PersonalizedExperienceResponse, PersonalizationError> {
        info!(
            customer_id = %customer_id,
            session_id = %interaction.session_id,
            channel = %interaction.channel,
            interaction_type = %interaction.interaction_type,
            "Processing customer interaction"
        );

        let result = self.run_pipeline(customer_id, interaction).await;

        if let Err(err) = &result {
            error!(
                customer_id = %customer_id,
                stage = %err.stage,
                cause = %err.source,
                "Personalization pipeline failed"
            );
        }

        result
    }

    async fn run_pipeline(
        &self,
        customer_id: CustomerId,
        interaction: &CustomerInteractionData,
    ) -> Result<PersonalizedExperienceResponse, PersonalizationError> {
        let profile = bounded(
            PipelineStage::ProfileUpdate,
            self.config.profile_update_timeout(),
            self.profile_updater.update_profile(customer_id, interaction),
        )
        .await
        .map_err(|failure| PersonalizationError::new(customer_id, failure))?;

        debug!(
            customer_id = %customer_id,
            lifecycle_stage = %profile.lifecycle_stage,
            interactions = profile.interaction_history.len(),
            "Profile updated"
        );

        let generator_timeout = self.config.generator_timeout();
        let context = interaction.context_summary();

        let (recommendations, content, predictions) = tokio::try_join!(
            bounded(
                PipelineStage::Recommendations,
                generator_timeout,
                self.recommendation_generator
                    .generate_recommendations(&profile, interaction),
            ),
            bounded(
                PipelineStage::Content,
                generator_timeout,
                self.content_generator
                    .generate_personalized_content(&profile, &context),
            ),
            bounded(
                PipelineStage::Predictions,
                generator_timeout,
                self.prediction_generator
                    .generate_predictions(&profile, interaction),
            ),
        )
        .map_err(|failure| PersonalizationError::new(customer_id, failure))?;

        debug!(
            customer_id = %customer_id,
            recommendations = recommendations.len(),
            next_best_action = %predictions.next_best_action,
            "Generators joined"
        );

        let strategy = StrategySelector::select_strategy(&profile, &predictions, interaction);
        let score = PersonalizationScorer::score(&profile, &recommendations);

        info!(
            customer_id = %customer_id,
            strategy = %strategy.strategy_type,
            channel = %strategy.channel,
            personalization_score = score,
            "Personalized experience assembled"
        );

        Ok(PersonalizedExperienceResponse::new(
            customer_id,
            Timestamp::now(),
            profile,
            recommendations,
            content,
            predictions,
            strategy,
            score,
        ))
    }
}

/// Awaits a collaborator call under a time limit, attributing any failure
/// to `stage`.
async fn bounded<T, E, F>(
    stage: PipelineStage,
    limit: Duration,
    call: F,
) -> Result<T, PersonalizationFailure>
where
    F: Future<Output = Result<T, E>>,
    E: Into<PersonalizationFailure>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(PersonalizationFailure::Timeout {
            stage,
            timeout_ms: millis(limit),
        }),
    }
}

/// Whole milliseconds in `limit`, saturating at `u64::MAX`.
fn millis(limit: Duration) -> u64 {
    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{CustomerProfile, LifecycleStage};
    use crate::domain::foundation::{ProductId, SessionId};
    use crate::domain::personalization::{
        CustomerPredictions, PersonalizedContent, ProductRecommendation, StrategyType, UrgencyLevel,
    };
    use crate::ports::{
        ContentGenerationError, PredictionError, ProfileUpdateError, RecommendationError,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockProfileUpdater {
        stage: LifecycleStage,
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockProfileUpdater {
        fn new(stage: LifecycleStage) -> Self {
            Self {
                stage,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(LifecycleStage::New)
            }
        }
    }

    #[async_trait]
    impl ProfileUpdater for MockProfileUpdater {
        async fn update_profile(
            &self,
            customer_id: CustomerId,
            _interaction: &CustomerInteractionData,
        ) -> Result<CustomerProfile, ProfileUpdateError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) as u32 + 1;
            if self.fail {
                return Err(ProfileUpdateError::Storage("connection reset".to_string()));
            }
            let mut profile = CustomerProfile::new(customer_id, Timestamp::now());
            profile.lifecycle_stage = self.stage;
            profile.behavior_patterns.insert("page_view".to_string(), call);
            Ok(profile)
        }
    }

    #[derive(Default)]
    struct MockRecommendations {
        fail: bool,
        seen: Mutex<Vec<CustomerProfile>>,
    }

    #[async_trait]
    impl RecommendationGenerator for MockRecommendations {
        async fn generate_recommendations(
            &self,
            profile: &CustomerProfile,
            _interaction: &CustomerInteractionData,
        ) -> Result<Vec<ProductRecommendation>, RecommendationError> {
            self.seen.lock().unwrap().push(profile.clone());
            if self.fail {
                return Err(RecommendationError::Unavailable("model offline".to_string()));
            }
            Ok(vec![
                ProductRecommendation::new(ProductId::new(1), "Headphones", "electronics", 99.0, 0.9),
                ProductRecommendation::new(ProductId::new(2), "Novel", "books", 12.0, 0.5),
            ])
        }
    }

    #[derive(Default)]
    struct MockContent {
        seen_context: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ContentGenerator for MockContent {
        async fn generate_personalized_content(
            &self,
            _profile: &CustomerProfile,
            context: &str,
        ) -> Result<PersonalizedContent, ContentGenerationError> {
            self.seen_context.lock().unwrap().push(context.to_string());
            Ok(PersonalizedContent {
                content_type: "product_story".to_string(),
                title: "Picked for you".to_string(),
                description: "Things we think you'll like".to_string(),
                emotional_tone: "friendly".to_string(),
                urgency_level: UrgencyLevel::Low,
                dynamic_elements: Default::default(),
                generated_at: Timestamp::now(),
            })
        }
    }

    struct MockPredictions {
        churn_risk: f64,
        purchase_probability: f64,
    }

    #[async_trait]
    impl PredictionGenerator for MockPredictions {
        async fn generate_predictions(
            &self,
            _profile: &CustomerProfile,
            _interaction: &CustomerInteractionData,
        ) -> Result<CustomerPredictions, PredictionError> {
            Ok(CustomerPredictions::new(
                self.purchase_probability,
                self.churn_risk,
                250.0,
                "engagement_nurturing",
            ))
        }
    }

    fn interaction() -> CustomerInteractionData {
        CustomerInteractionData::new(SessionId::new("sess-1").unwrap(), "web", "page_view")
            .unwrap()
            .with_context("page", "home")
    }

    fn handler(
        updater: Arc<MockProfileUpdater>,
        recommendations: Arc<MockRecommendations>,
        content: Arc<MockContent>,
        churn_risk: f64,
        purchase_probability: f64,
    ) -> ProcessInteractionHandler {
        ProcessInteractionHandler::new(
            updater,
            recommendations,
            content,
            Arc::new(MockPredictions {
                churn_risk,
                purchase_probability,
            }),
        )
    }

    #[tokio::test]
    async fn assembles_response_from_all_collaborators() {
        let recommendations = Arc::new(MockRecommendations::default());
        let h = handler(
            Arc::new(MockProfileUpdater::new(LifecycleStage::Loyal)),
            recommendations.clone(),
            Arc::new(MockContent::default()),
            0.9,
            0.2,
        );

        let response = h.process_interaction(CustomerId::new(42), &interaction()).await.unwrap();

        assert_eq!(response.customer_id(), CustomerId::new(42));
        assert_eq!(response.recommendations().len(), 2);
        assert_eq!(response.strategy().strategy_type, StrategyType::RetentionCampaign);
        // one facet (behavior patterns) = 0.1, mean confidence 0.7 * 0.5 = 0.35
        assert_eq!(response.personalization_score(), 0.45);
        assert_eq!(response.profile().lifecycle_stage, LifecycleStage::Loyal);
    }

    #[tokio::test]
    async fn content_generator_receives_rendered_context() {
        let content = Arc::new(MockContent::default());
        let h = handler(
            Arc::new(MockProfileUpdater::new(LifecycleStage::New)),
            Arc::new(MockRecommendations::default()),
            content.clone(),
            0.1,
            0.1,
        );

        h.process_interaction(CustomerId::new(1), &interaction()).await.unwrap();

        assert_eq!(content.seen_context.lock().unwrap().as_slice(), ["{page=home}"]);
    }

    #[tokio::test]
    async fn profile_failure_skips_generators() {
        let recommendations = Arc::new(MockRecommendations::default());
        let h = handler(
            Arc::new(MockProfileUpdater::failing()),
            recommendations.clone(),
            Arc::new(MockContent::default()),
            0.1,
            0.1,
        );

        let err = h
            .process_interaction(CustomerId::new(3), &interaction())
            .await
            .unwrap_err();

        assert_eq!(err.customer_id, CustomerId::new(3));
        assert_eq!(err.stage, PipelineStage::ProfileUpdate);
        assert!(recommendations.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn generator_failure_fails_whole_request() {
        let recommendations = Arc::new(MockRecommendations {
            fail: true,
            ..Default::default()
        });
        let h = handler(
            Arc::new(MockProfileUpdater::new(LifecycleStage::Engaged)),
            recommendations,
            Arc::new(MockContent::default()),
            0.1,
            0.1,
        );

        let err = h
            .process_interaction(CustomerId::new(8), &interaction())
            .await
            .unwrap_err();

        assert_eq!(err.stage, PipelineStage::Recommendations);
        assert_eq!(
            err.source,
            PersonalizationFailure::Recommendation(RecommendationError::Unavailable(
                "model offline".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn generators_see_the_updated_profile() {
        let updater = Arc::new(MockProfileUpdater::new(LifecycleStage::Engaged));
        let recommendations = Arc::new(MockRecommendations::default());
        let h = handler(
            updater.clone(),
            recommendations.clone(),
            Arc::new(MockContent::default()),
            0.1,
            0.1,
        );

        let response = h.process_interaction(CustomerId::new(4), &interaction()).await.unwrap();

        let seen = recommendations.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(&seen[0], response.profile());
        assert_eq!(seen[0].behavior_patterns["page_view"], 1);
    }

    #[tokio::test]
    async fn batch_preserves_input_order() {
        let h = handler(
            Arc::new(MockProfileUpdater::new(LifecycleStage::New)),
            Arc::new(MockRecommendations::default()),
            Arc::new(MockContent::default()),
            0.1,
            0.1,
        );

        let commands = (1..=5)
            .map(|id| ProcessInteractionCommand {
                customer_id: CustomerId::new(id),
                interaction: interaction(),
            })
            .collect();

        let results = h.handle_batch(commands).await;

        let ids: Vec<u64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().customer_id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn bounded_reports_timeout_for_stage() {
        let result: Result<(), PersonalizationFailure> = bounded(
            PipelineStage::Predictions,
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok::<(), PredictionError>(())
            },
        )
        .await;

        assert_eq!(
            result,
            Err(PersonalizationFailure::Timeout {
                stage: PipelineStage::Predictions,
                timeout_ms: 10,
            })
        );
    }

    #[test]
    fn timeout_millis_saturate_instead_of_truncating() {
        assert_eq!(millis(Duration::from_millis(20)), 20);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u64::MAX);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
