//! In-process cache sizing.

use serde::{Deserialize, Serialize};

const fn default_ttl_secs() -> u64 {
    300
}

const fn default_validation_capacity() -> usize {
    10
}

const fn default_context_capacity() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Entries older than this are treated as misses.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    #[serde(default = "default_validation_capacity")]
    pub validation_capacity: usize,

    #[serde(default = "default_context_capacity")]
    pub context_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            validation_capacity: default_validation_capacity(),
            context_capacity: default_context_capacity(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_secs)
    }
}
