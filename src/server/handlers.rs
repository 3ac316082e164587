use super::types::{ErrorResponse, PromptRequest, RelayResponse};
use crate::{Result, history::ChatLog, history::Entry, llm::InferenceClient};
use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn InferenceClient>,
    pub log: Arc<ChatLog>,
}

pub async fn generate(State(state): State<AppState>, Json(request): Json<PromptRequest>) -> Response {
    info!("Received generate request ({} chars)", request.prompt.len());

    // Downstream failures deliberately come back as 200 with an error body.
    match relay(&state, &request).await {
        Ok(output) => Json(RelayResponse { output }).into_response(),
        Err(e) => {
            error!("Relay failed: {}", e);
            Json(ErrorResponse {
                error: e.to_string(),
            })
            .into_response()
        }
    }
}

/// One atomic round trip: call the inference service, then record the
/// exchange. The response is only returned once both have completed.
async fn relay(state: &AppState, request: &PromptRequest) -> Result<String> {
    let output = state
        .llm
        .generate(&request.prompt, request.temperature)
        .await?;

    state
        .log
        .append(&Entry::new(request.prompt.clone(), output.clone()))
        .await?;

    Ok(output)
}
