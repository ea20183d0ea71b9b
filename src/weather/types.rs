use crate::Error;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Unit systems accepted by the weather provider's `units` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Standard => "K",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            "standard" => Ok(Self::Standard),
            other => Err(Error::config(format!(
                "Unknown weather units '{}'. Valid units: metric, imperial, standard",
                other
            ))),
        }
    }
}

/// Current conditions for a city, as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub description: String,
    /// Kept as the provider's number so it prints exactly as received.
    pub temperature: serde_json::Number,
    pub units: Units,
}

impl CurrentWeather {
    pub fn temperature_label(&self) -> String {
        format!("{} {}", self.temperature, self.units.suffix())
    }
}

// OpenWeatherMap `/data/2.5/weather` payload, reduced to the fields we read.

#[derive(Debug, Deserialize)]
pub(crate) struct OwmCurrentResponse {
    #[serde(default)]
    pub weather: Vec<OwmCondition>,
    pub main: OwmMain,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmCondition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmMain {
    pub temp: serde_json::Number,
}
