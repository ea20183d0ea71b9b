use serde::{Deserialize, Serialize};

pub use crate::finance::FinanceAnswer as FinanceResponse;

/// Body of `/chat`. `message` is optional on the wire so an absent field
/// gets the same 400 as an empty one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

pub type FinanceRequest = ChatRequest;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub weather: String,
    pub temperature: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
