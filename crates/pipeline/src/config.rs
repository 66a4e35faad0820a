//! Pipeline timing configuration.
//!
//! The exact delay values are deployment tuning, not behaviour: the
//! orchestrator only requires that months are strictly serialized with a
//! fixed wait between attempts, which keeps one run safely under the image
//! service's requests-per-minute ceiling.

use std::time::Duration;

/// Default wait between month generations.
const DEFAULT_PACING_SECS: u64 = 20;

/// Default wait before retrying a failed month.
const DEFAULT_RETRY_COOLDOWN_SECS: u64 = 30;

/// Timing knobs for the full-run loop.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Wait inserted after every month attempt except the last, on success
    /// and failure paths alike.
    pub month_pacing: Duration,
    /// Wait before the single retry of a failed month.
    pub retry_cooldown: Duration,
}

impl PipelineConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default |
    /// |--------------------------------|---------|
    /// | `PIPELINE_PACING_SECS`         | `20`    |
    /// | `PIPELINE_RETRY_COOLDOWN_SECS` | `30`    |
    pub fn from_env() -> Self {
        let pacing_secs: u64 = std::env::var("PIPELINE_PACING_SECS")
            .unwrap_or_else(|_| DEFAULT_PACING_SECS.to_string())
            .parse()
            .expect("PIPELINE_PACING_SECS must be a valid u64");

        let cooldown_secs: u64 = std::env::var("PIPELINE_RETRY_COOLDOWN_SECS")
            .unwrap_or_else(|_| DEFAULT_RETRY_COOLDOWN_SECS.to_string())
            .parse()
            .expect("PIPELINE_RETRY_COOLDOWN_SECS must be a valid u64");

        Self {
            month_pacing: Duration::from_secs(pacing_secs),
            retry_cooldown: Duration::from_secs(cooldown_secs),
        }
    }

    /// Zero-delay configuration for tests.
    pub fn immediate() -> Self {
        Self {
            month_pacing: Duration::ZERO,
            retry_cooldown: Duration::ZERO,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            month_pacing: Duration::from_secs(DEFAULT_PACING_SECS),
            retry_cooldown: Duration::from_secs(DEFAULT_RETRY_COOLDOWN_SECS),
        }
    }
}
