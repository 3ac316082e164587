use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Self {
        // No request timeout: a hung downstream blocks that request. Known gap.
        let client = reqwest::Client::new();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        debug!(
            "Requesting completion from model '{}' at {}",
            self.model, self.base_url
        );

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            temperature,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::llm(format!(
                "inference service returned {status}"
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("malformed inference response: {e}")))?;

        debug!("Received completion ({} chars)", body.response.len());

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "http://localhost:11434".to_string(),
            model: "tinyllama".to_string(),
        }
    }

    #[test]
    fn test_ollama_client_creation() {
        let config = create_test_config();
        let client = OllamaClient::new(config);

        assert_eq!(client.model, "tinyllama");
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_ollama_client_strips_trailing_slash() {
        let mut config = create_test_config();
        config.base_url = "http://localhost:11434/".to_string();

        let client = OllamaClient::new(config);
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
