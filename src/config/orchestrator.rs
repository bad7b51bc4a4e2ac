//! Orchestrator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for any configured timeout, in milliseconds.
const MAX_TIMEOUT_MS: u64 = 60_000;

/// Upper bound for concurrent requests in a batch.
const MAX_BATCH_CONCURRENCY: usize = 256;

/// Orchestration pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OrchestratorConfig {
    /// Time allowed for the profile update, in milliseconds
    #[serde(default = "default_profile_update_timeout")]
    pub profile_update_timeout_ms: u64,

    /// Time allowed for each generator call, in milliseconds
    #[serde(default = "default_generator_timeout")]
    pub generator_timeout_ms: u64,

    /// Maximum requests processed concurrently by `handle_batch`
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,
}

impl OrchestratorConfig {
    /// Get the profile update timeout as Duration
    pub fn profile_update_timeout(&self) -> Duration {
        Duration::from_millis(self.profile_update_timeout_ms)
    }

    /// Get the per-generator timeout as Duration
    pub fn generator_timeout(&self) -> Duration {
        Duration::from_millis(self.generator_timeout_ms)
    }

    /// Validate orchestrator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profile_update_timeout_ms == 0 || self.profile_update_timeout_ms > MAX_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout("profile_update_timeout_ms"));
        }
        if self.generator_timeout_ms == 0 || self.generator_timeout_ms > MAX_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout("generator_timeout_ms"));
        }
        if self.batch_concurrency == 0 || self.batch_concurrency > MAX_BATCH_CONCURRENCY {
            return Err(ValidationError::InvalidBatchConcurrency);
        }
        Ok(())
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            profile_update_timeout_ms: default_profile_update_timeout(),
            generator_timeout_ms: default_generator_timeout(),
            batch_concurrency: default_batch_concurrency(),
        }
    }
}

fn default_profile_update_timeout() -> u64 {
    2_000
}

fn default_generator_timeout() -> u64 {
    5_000
}

fn default_batch_concurrency() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_config_defaults() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.profile_update_timeout_ms, 2_000);
        assert_eq!(config.generator_timeout_ms, 5_000);
        assert_eq!(config.batch_concurrency, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_durations() {
        let config = OrchestratorConfig {
            profile_update_timeout_ms: 250,
            generator_timeout_ms: 1_500,
            ..Default::default()
        };
        assert_eq!(config.profile_update_timeout(), Duration::from_millis(250));
        assert_eq!(config.generator_timeout(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = OrchestratorConfig {
            generator_timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout("generator_timeout_ms"))
        ));
    }

    #[test]
    fn test_validation_rejects_excessive_timeout() {
        let config = OrchestratorConfig {
            profile_update_timeout_ms: 120_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_concurrency() {
        let config = OrchestratorConfig {
            batch_concurrency: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBatchConcurrency)
        ));
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let json = r#"{ "generator_timeout_ms": 900 }"#;
        let config: OrchestratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.generator_timeout_ms, 900);
        assert_eq!(config.profile_update_timeout_ms, 2_000);
    }
}
