use super::types::{CurrentWeather, OwmCurrentResponse, Units};
use crate::{Error, Result, config::WeatherConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const PROVIDER: &str = "openweathermap";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<CurrentWeather>;
}

pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    units: Units,
    lang: String,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let units = config.units.parse::<Units>()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            units,
            lang: config.lang,
        })
    }

    pub fn units(&self) -> Units {
        self.units
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<CurrentWeather> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);
        debug!("Requesting current weather for city: {}", city);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Weather provider returned {} for city {}: {}",
                status, city, body
            );
            return Err(Error::UpstreamStatus {
                provider: PROVIDER,
                status: status.as_u16(),
            });
        }

        let payload: OwmCurrentResponse = response.json().await?;
        let description = payload
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .ok_or_else(|| Error::weather("response carried no weather conditions"))?;

        Ok(CurrentWeather {
            description,
            temperature: payload.main.temp,
            units: self.units,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> WeatherConfig {
        WeatherConfig {
            base_url: "http://localhost:9999/".to_string(),
            api_key: "test-key".to_string(),
            units: "imperial".to_string(),
            lang: "en".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = OpenWeatherClient::new(create_test_config()).unwrap();
        assert_eq!(client.units(), Units::Imperial);
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_client_rejects_unknown_units() {
        let mut config = create_test_config();
        config.units = "rankine".to_string();
        assert!(OpenWeatherClient::new(config).is_err());
    }
}
