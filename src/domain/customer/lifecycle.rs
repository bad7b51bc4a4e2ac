//! Customer lifecycle stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Where a customer sits in their relationship with the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    #[default]
    New,
    Engaged,
    Loyal,
    Champion,
    AtRisk,
    Churned,
}

impl LifecycleStage {
    /// All stages, in relationship order.
    pub const ALL: [LifecycleStage; 6] = [
        LifecycleStage::New,
        LifecycleStage::Engaged,
        LifecycleStage::Loyal,
        LifecycleStage::Champion,
        LifecycleStage::AtRisk,
        LifecycleStage::Churned,
    ];

    /// Returns the wire label for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStage::New => "new",
            LifecycleStage::Engaged => "engaged",
            LifecycleStage::Loyal => "loyal",
            LifecycleStage::Champion => "champion",
            LifecycleStage::AtRisk => "at_risk",
            LifecycleStage::Churned => "churned",
        }
    }

    /// Stage reached purely from the number of recorded interactions.
    pub fn from_interaction_count(count: usize) -> Self {
        match count {
            c if c > 50 => LifecycleStage::Champion,
            c if c > 20 => LifecycleStage::Loyal,
            c if c > 5 => LifecycleStage::Engaged,
            _ => LifecycleStage::New,
        }
    }

    /// True for stages where the relationship is in decline.
    pub fn is_declining(&self) -> bool {
        matches!(self, LifecycleStage::AtRisk | LifecycleStage::Churned)
    }

    /// Lifetime value multiplier applied by the profile updater.
    pub fn value_multiplier(&self) -> f64 {
        match self {
            LifecycleStage::New => 1.0,
            LifecycleStage::Engaged => 1.5,
            LifecycleStage::Loyal => 2.0,
            LifecycleStage::Champion => 3.0,
            LifecycleStage::AtRisk | LifecycleStage::Churned => 1.0,
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleStage::ALL
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("lifecycle_stage", format!("unknown stage '{}'", s))
            })
    }
}
