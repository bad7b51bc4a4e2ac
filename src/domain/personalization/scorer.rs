//! Personalization score - how tailored a response is.
//!
//! Half the score comes from profile completeness, half from the mean
//! recommendation confidence. The sum is rounded to two decimals,
//! half away from zero on the hundredths digit (`floor(x * 100 + 0.5) / 100`).

use crate::domain::customer::{CustomerProfile, PROFILE_FACET_COUNT};

use super::ProductRecommendation;

/// Weight of each of the two score components.
pub const COMPONENT_WEIGHT: f64 = 0.5;

/// Rounds to `decimals` places, with halves going up.
///
/// Rust's `f64::round` would do the same for positive values, but spelling it
/// out keeps the rule explicit and identical for negative inputs
/// (`-0.125` rounds to `-0.12`, not `-0.13`).
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Pure scoring functions.
pub struct PersonalizationScorer;

impl PersonalizationScorer {
    /// Scores a profile and its recommendations, in [0, 1] for in-range inputs.
    ///
    /// Confidence scores are not clamped; out-of-range producers push the
    /// result out of range too.
    pub fn score(profile: &CustomerProfile, recommendations: &[ProductRecommendation]) -> f64 {
        let total = Self::profile_component(profile) + Self::recommendation_component(recommendations);
        round_half_up(total, 2)
    }

    /// Completeness share: populated facets / 5 × 0.5.
    pub fn profile_component(profile: &CustomerProfile) -> f64 {
        (profile.populated_facet_count() as f64 / PROFILE_FACET_COUNT as f64) * COMPONENT_WEIGHT
    }

    /// Confidence share: mean confidence × 0.5, zero for no recommendations.
    pub fn recommendation_component(recommendations: &[ProductRecommendation]) -> f64 {
        if recommendations.is_empty() {
            return 0.0;
        }
        let sum: f64 = recommendations.iter().map(|r| r.confidence_score).sum();
        (sum / recommendations.len() as f64) * COMPONENT_WEIGHT
    }
}
