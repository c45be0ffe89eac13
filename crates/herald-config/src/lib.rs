//! # herald-config
//!
//! Layered configuration loading for Herald using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HERALD_*` prefix, `__` as separator)
//! 2. `OPENAI_API_KEY`, mapped to `llm.api_key`
//! 3. Project-level `.herald/config.toml`
//! 4. User-level `~/.config/herald/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HERALD_LLM__MODEL` -> `llm.model`, `HERALD_CACHE__TTL_SECS` -> `cache.ttl_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use herald_config::HeraldConfig;
//!
//! let config = HeraldConfig::load_with_dotenv().expect("config");
//!
//! if config.llm.is_configured() {
//!     println!("model: {}", config.llm.model);
//! }
//! ```

mod cache;
mod enhancement;
mod error;
mod llm;

pub use cache::CacheConfig;
pub use enhancement::EnhancementConfig;
pub use error::ConfigError;
pub use llm::LlmConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeraldConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub enhancement: EnhancementConfig,
}

impl HeraldConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed into
    /// the expected shape, and [`ConfigError::InvalidValue`] when the LLM
    /// section holds an unusable value.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.llm.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".herald/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: the conventional OpenAI key variable
        figment = figment.merge(
            Env::raw()
                .only(&["OPENAI_API_KEY"])
                .map(|_| "llm.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("HERALD_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("herald").join("config.toml"))
    }
}
