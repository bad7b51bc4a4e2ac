//! Behavioral predictions for a customer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output of the prediction generator.
///
/// Probabilities and risks are expected in [0, 1]. The core does not
/// validate them; it only compares them against strategy thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPredictions {
    pub purchase_probability: f64,
    pub churn_risk: f64,
    pub lifetime_value: f64,
    pub next_best_action: String,
    #[serde(default)]
    pub predicted_categories: Vec<String>,
    #[serde(default)]
    pub behavior_predictions: BTreeMap<String, f64>,
}

impl CustomerPredictions {
    pub fn new(
        purchase_probability: f64,
        churn_risk: f64,
        lifetime_value: f64,
        next_best_action: impl Into<String>,
    ) -> Self {
        Self {
            purchase_probability,
            churn_risk,
            lifetime_value,
            next_best_action: next_best_action.into(),
            predicted_categories: Vec::new(),
            behavior_predictions: BTreeMap::new(),
        }
    }
}
