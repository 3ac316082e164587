pub mod handlers;
pub mod types;

use crate::{Error, Result, config::Config, history::ChatLog, llm::OllamaClient};
use axum::{Router, http::HeaderValue, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the relay router for the given state and CORS allow-list.
pub fn router(state: handlers::AppState, allowed_origins: &[String]) -> Result<Router> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::config(format!("invalid CORS origin: {origin}")))
        })
        .collect::<Result<Vec<_>>>()?;

    // Credentials are allowed, so methods and headers mirror the request
    // instead of using a wildcard.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the chat log
    let log_path =
        std::env::var("CHAT_LOG_PATH").unwrap_or_else(|_| config.server.log_path.clone());
    let log = ChatLog::new(log_path);

    // Initialize the inference client
    let llm = OllamaClient::new(config.llm.clone());

    // Create application state
    let app_state = handlers::AppState {
        llm: Arc::new(llm),
        log: Arc::new(log),
    };

    // Create router
    let app = router(app_state, &config.server.allowed_origins)?;

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
