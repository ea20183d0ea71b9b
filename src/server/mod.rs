pub mod handlers;
pub mod types;

use crate::{
    Result, config::Config, finance::FinanceProfile, llm::create_llm_client,
    weather::OpenWeatherClient,
};
use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};
use uuid::Uuid;

/// Builds the gateway routes over an already-initialized state.
pub fn router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = Uuid::new_v4();
        info_span!(
            "request",
            %request_id,
            method = %request.method(),
            uri = %request.uri()
        )
    });

    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/financas", post(handlers::finance))
        .route("/weather", post(handlers::weather))
        .route("/health", get(handlers::health))
        .layer(trace)
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Provider clients are created once and shared by every request
    let llm = create_llm_client(config.llm.clone())?;
    let weather = OpenWeatherClient::new(config.weather.clone())?;
    let finance = FinanceProfile::from_config(&config.finance);

    let app_state = AppState::new(llm, Arc::new(weather), finance);
    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
