//! Enhancement protection thresholds and retry budget.

use serde::{Deserialize, Serialize};

const fn default_max_attempts() -> u32 {
    1
}

const fn default_shrink_threshold() -> f64 {
    -15.0
}

const fn default_growth_threshold() -> f64 {
    200.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnhancementConfig {
    /// LLM calls allowed per enhancement while protection keeps triggering.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Size change (percent) below which truncation checks run.
    #[serde(default = "default_shrink_threshold")]
    pub shrink_threshold_percent: f64,

    /// Size change (percent) above which the rewrite is rejected as bloat.
    #[serde(default = "default_growth_threshold")]
    pub growth_threshold_percent: f64,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            shrink_threshold_percent: default_shrink_threshold(),
            growth_threshold_percent: default_growth_threshold(),
        }
    }
}
