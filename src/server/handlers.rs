use super::types::*;
use crate::{
    Error,
    finance::{self, FinanceProfile},
    llm::{GenerateRequest, LlmClient},
    weather::WeatherProvider,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const MESSAGE_NOT_PROVIDED: &str = "message not provided";
pub const CITY_NOT_PROVIDED: &str = "city not provided";
pub const MODEL_UNAVAILABLE: &str = "could not obtain model response";
pub const WEATHER_UNAVAILABLE: &str = "could not obtain weather";

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Provider clients shared read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub weather: Arc<dyn WeatherProvider>,
    pub finance: Arc<FinanceProfile>,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        weather: Arc<dyn WeatherProvider>,
        finance: FinanceProfile,
    ) -> Self {
        Self {
            llm,
            weather,
            finance: Arc::new(finance),
        }
    }
}

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Unreadable bodies keep axum's status but answer in the `{error}` shape.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err((
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            ))
        }
    }
}

fn required(value: Option<String>, missing: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(api_error(StatusCode::BAD_REQUEST, missing)),
    }
}

fn upstream_failure(route: &str, e: &Error, status: StatusCode, message: &str) -> ApiError {
    if e.is_upstream() {
        warn!("Upstream failure on {}: {}", route, e);
    } else {
        error!("Failed to process {} request: {}", route, e);
    }
    api_error(status, message)
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = body(payload)?;
    let message = required(request.message, MESSAGE_NOT_PROVIDED)?;
    info!("Received chat request ({} chars)", message.len());

    match state.llm.generate(GenerateRequest::new(message)).await {
        Ok(output) => Ok(Json(ChatResponse {
            response: output.text,
        })),
        Err(e) => Err(upstream_failure(
            "chat",
            &e,
            StatusCode::BAD_GATEWAY,
            MODEL_UNAVAILABLE,
        )),
    }
}

pub async fn finance(
    State(state): State<AppState>,
    payload: Result<Json<FinanceRequest>, JsonRejection>,
) -> Result<Json<FinanceResponse>, ApiError> {
    let request = body(payload)?;
    let message = required(request.message, MESSAGE_NOT_PROVIDED)?;
    info!("Received finance request ({} chars)", message.len());

    let result = match state.llm.generate(state.finance.request_for(&message)).await {
        Ok(output) => finance::parse_answer(&output.text),
        Err(e) => Err(e),
    };

    match result {
        Ok(answer) => {
            info!(
                "Finance answer produced with {} next steps",
                answer.next_steps.len()
            );
            Ok(Json(answer))
        }
        Err(e) => Err(upstream_failure(
            "finance",
            &e,
            StatusCode::BAD_GATEWAY,
            MODEL_UNAVAILABLE,
        )),
    }
}

pub async fn weather(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let request = body(payload)?;
    let city = required(request.city, CITY_NOT_PROVIDED)?;
    info!("Received weather request for city: {}", city);

    match state.weather.current(&city).await {
        Ok(current) => Ok(Json(WeatherResponse {
            temperature: current.temperature_label(),
            weather: current.description,
            city,
        })),
        Err(e) => Err(upstream_failure(
            "weather",
            &e,
            StatusCode::BAD_REQUEST,
            WEATHER_UNAVAILABLE,
        )),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
