//! Template content generator.
//!
//! Picks a content template from the lifecycle stage and a tone from the
//! customer's dominant personality trait.

use async_trait::async_trait;

use crate::domain::customer::{CustomerProfile, LifecycleStage};
use crate::domain::foundation::{AttributeMap, Timestamp};
use crate::domain::personalization::{PersonalizedContent, UrgencyLevel};
use crate::ports::{ContentGenerationError, ContentGenerator};

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateContentGenerator;

impl TemplateContentGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn content_type(stage: LifecycleStage) -> &'static str {
    match stage {
        LifecycleStage::New => "welcome_banner",
        LifecycleStage::Loyal | LifecycleStage::Champion => "loyalty_spotlight",
        LifecycleStage::AtRisk | LifecycleStage::Churned => "win_back_message",
        LifecycleStage::Engaged => "product_story",
    }
}

fn tone(dominant_trait: Option<&str>) -> &'static str {
    match dominant_trait {
        Some("extraversion") => "enthusiastic",
        Some("agreeableness") => "warm",
        Some("conscientiousness") => "informative",
        Some("openness") => "inspirational",
        _ => "friendly",
    }
}

fn urgency(stage: LifecycleStage) -> UrgencyLevel {
    if stage.is_declining() {
        UrgencyLevel::High
    } else if stage == LifecycleStage::New {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

fn copy(kind: &str, focus: &str) -> (String, String) {
    match kind {
        "welcome_banner" => (
            "Welcome aboard".to_string(),
            format!("Start exploring our {focus} picks, chosen just for you."),
        ),
        "loyalty_spotlight" => (
            "Thanks for being with us".to_string(),
            format!("Early access to new {focus} arrivals, reserved for our best customers."),
        ),
        "win_back_message" => (
            "We miss you".to_string(),
            format!("A lot has changed in {focus} since your last visit. Come take a look."),
        ),
        _ => (
            "Picked for you".to_string(),
            format!("The story behind this week's favourite {focus} products."),
        ),
    }
}

#[async_trait]
impl ContentGenerator for TemplateContentGenerator {
    async fn generate_personalized_content(
        &self,
        profile: &CustomerProfile,
        context: &str,
    ) -> Result<PersonalizedContent, ContentGenerationError> {
        let stage = profile.lifecycle_stage;
        let kind = content_type(stage);
        let focus = profile.top_preference().unwrap_or("featured");
        let (title, description) = copy(kind, focus);

        let mut dynamic_elements = AttributeMap::new();
        dynamic_elements.insert("focus_category".to_string(), focus.into());
        dynamic_elements.insert("lifecycle_stage".to_string(), stage.as_str().into());
        dynamic_elements.insert("context".to_string(), context.into());

        Ok(PersonalizedContent {
            content_type: kind.to_string(),
            title,
            description,
            emotional_tone: tone(profile.dominant_trait()).to_string(),
            urgency_level: urgency(stage),
            dynamic_elements,
            generated_at: Timestamp::now(),
        })
    }
}
