mod types;

pub use types::*;

use crate::{Error, Result, weather::Units};
use std::{env, path::Path};
use tracing::{debug, info};

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const LLM_API_KEY_VAR: &str = "GENAI_API_KEY";
pub const WEATHER_API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
pub const PORT_VAR: &str = "PORT";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const SUPPORTED_PROVIDERS: &[&str] = &["gemini", "openai"];

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`), applies
/// environment overrides and validates the result.
///
/// An explicitly configured path must exist. The default path is optional;
/// when it is absent the built-in defaults are used.
pub async fn load() -> Result<Config> {
    let (path, required) = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    let mut config = load_from(&path, required).await?;
    config.apply_overrides(|key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>, required: bool) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    if !required && !tokio::fs::try_exists(path).await.unwrap_or(false) {
        info!(
            "No configuration file at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overlays secrets and the listen port from the environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(LLM_API_KEY_VAR).filter(|v| !v.is_empty()) {
            self.llm.api_key = key;
        }
        if let Some(key) = lookup(WEATHER_API_KEY_VAR).filter(|v| !v.is_empty()) {
            self.weather.api_key = key;
        }
        if let Some(port) = lookup(PORT_VAR).and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_PROVIDERS.contains(&self.llm.provider.as_str()) {
            return Err(Error::config(format!(
                "Unsupported LLM provider '{}'. Supported: {}",
                self.llm.provider,
                SUPPORTED_PROVIDERS.join(", ")
            )));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "LLM API key missing; set llm.api_key or {}",
                LLM_API_KEY_VAR
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if self.weather.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "Weather API key missing; set weather.api_key or {}",
                WEATHER_API_KEY_VAR
            )));
        }
        self.weather.units.parse::<Units>()?;
        if self.llm.timeout_secs == 0 || self.weather.timeout_secs == 0 {
            return Err(Error::config("timeouts must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.finance.temperature) {
            return Err(Error::config(format!(
                "finance.temperature must be within [0, 2], got {}",
                self.finance.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.llm.api_key = "llm-key".to_string();
        config.weather.api_key = "weather-key".to_string();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.weather.lang, "pt_br");
        assert_eq!(config.finance.locale, "pt-BR");
        assert_eq!(config.finance.temperature, 0.2);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str(
            r#"
server:
  port: 8081
llm:
  model: "gemini-2.0-flash"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (LLM_API_KEY_VAR, "from-env"),
            (WEATHER_API_KEY_VAR, "weather-env"),
            (PORT_VAR, "9090"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.llm.api_key, "from-env");
        assert_eq!(config.weather.api_key, "weather-env");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_empty_env_value_does_not_override() {
        let mut config = valid_config();
        config.apply_overrides(|key| (key == LLM_API_KEY_VAR).then(String::new));
        assert_eq!(config.llm.api_key, "llm-key");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == PORT_VAR).then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_api_keys() {
        let mut config = valid_config();
        config.llm.api_key.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(LLM_API_KEY_VAR));

        let mut config = valid_config();
        config.weather.api_key = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(WEATHER_API_KEY_VAR));
    }

    #[test]
    fn test_validate_rejects_unknown_provider() {
        let mut config = valid_config();
        config.llm.provider = "anthropic".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Unsupported LLM provider"));
    }

    #[test]
    fn test_validate_rejects_bad_units_and_timeouts() {
        let mut config = valid_config();
        config.weather.units = "kelvinish".to_string();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.weather.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.finance.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(dir.path().join("absent.yaml"), false)
            .await
            .unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[tokio::test]
    async fn test_missing_required_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(dir.path().join("absent.yaml"), true).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
