use super::mocks::{MockLlmClient, MockWeather};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use genai_gateway::{
    config::{Config, FinanceConfig, LlmConfig, LogsConfig, ServerConfig, WeatherConfig},
    finance::FinanceProfile,
    llm::LlmClient,
    server::{handlers::AppState, router},
    weather::{OpenWeatherClient, WeatherProvider},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: "gemini".to_string(),
            base_url: String::new(),
            api_key: "test-llm-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 5,
        },
        weather: WeatherConfig {
            base_url: "https://api.openweathermap.org".to_string(),
            api_key: "test-weather-key".to_string(),
            units: "metric".to_string(),
            lang: "pt_br".to_string(),
            timeout_secs: 5,
        },
        finance: FinanceConfig::default(),
    }
}

/// Weather config aimed at a local stub server
pub fn weather_config_for(base_url: &str) -> WeatherConfig {
    WeatherConfig {
        base_url: base_url.to_string(),
        ..create_test_config().weather
    }
}

/// LLM config aimed at a local stub server
pub fn llm_config_for(provider: &str, base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: provider.to_string(),
        base_url: base_url.to_string(),
        ..create_test_config().llm
    }
}

pub fn create_test_app(llm: Arc<dyn LlmClient>, weather: Arc<dyn WeatherProvider>) -> Router {
    router(AppState::new(llm, weather, FinanceProfile::default()))
}

/// App with a mock LLM and a weather mock that must never be called
pub fn create_llm_test_app(llm: Arc<MockLlmClient>) -> Router {
    create_test_app(llm, Arc::new(MockWeather::new()))
}

/// App with an unused mock LLM and a real weather client pointed at `base_url`
pub fn create_weather_test_app(base_url: &str) -> Router {
    let weather = OpenWeatherClient::new(weather_config_for(base_url)).unwrap();
    create_test_app(Arc::new(MockLlmClient::new()), Arc::new(weather))
}

/// POST a JSON body and return the status with the parsed JSON reply
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  provider: "openai"
  base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
  api_key: "test-api-key"
  model: "gemini-2.5-flash"
  timeout_secs: 30

weather:
  api_key: "weather-key"
  units: "imperial"
  lang: "en"

finance:
  locale: "en-US"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
