use serde::{Deserialize, Serialize};

/// Request body for the Ollama `/api/generate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub stream: bool,
}

/// The subset of the Ollama generate response the relay cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}
