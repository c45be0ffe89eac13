use figment::Jail;
use herald_config::{ConfigError, HeraldConfig};

#[test]
fn openai_api_key_fills_llm_key() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-from-openai-var");
        let config = HeraldConfig::figment().extract::<HeraldConfig>()?;
        assert_eq!(config.llm.api_key, "sk-from-openai-var");
        assert!(config.llm.is_configured());
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_openai_api_key() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-generic");
        jail.set_env("HERALD_LLM__API_KEY", "sk-herald");
        let config = HeraldConfig::figment().extract::<HeraldConfig>()?;
        assert_eq!(config.llm.api_key, "sk-herald");
        Ok(())
    });
}

#[test]
fn nested_sections_map_from_double_underscore() {
    Jail::expect_with(|jail| {
        jail.set_env("HERALD_CACHE__TTL_SECS", "5");
        jail.set_env("HERALD_ENHANCEMENT__MAX_ATTEMPTS", "2");
        let config = HeraldConfig::figment().extract::<HeraldConfig>()?;
        assert_eq!(config.cache.ttl_secs, 5);
        assert_eq!(config.enhancement.max_attempts, 2);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".herald")?;
        jail.create_file(".herald/config.toml", "[llm]\nmodel = \"from-toml\"\n")?;
        jail.set_env("HERALD_LLM__MODEL", "from-env");
        let config = HeraldConfig::figment().extract::<HeraldConfig>()?;
        assert_eq!(config.llm.model, "from-env");
        Ok(())
    });
}

#[test]
fn load_rejects_out_of_range_temperature() {
    Jail::expect_with(|jail| {
        jail.set_env("HERALD_LLM__TEMPERATURE", "5.0");
        let err = HeraldConfig::load().unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::InvalidValue {
                    field: "llm.temperature",
                    ..
                }
            ),
            "{err}"
        );
        Ok(())
    });
}

#[test]
fn load_succeeds_without_api_key() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("HERALD_LLM__MODEL", "gpt-4o");
        let config = HeraldConfig::load().map_err(|e| e.to_string())?;
        assert!(!config.llm.is_configured());
        Ok(())
    });
}
