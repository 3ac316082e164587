use serde::{Deserialize, Serialize};

fn default_temperature() -> f32 {
    0.7
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_prompt_request_default_temperature() {
        let request: PromptRequest = serde_json::from_value(json!({"prompt": "Hello"})).unwrap();

        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.temperature, 0.7);
    }

    #[test]
    fn test_prompt_request_explicit_temperature() {
        let request: PromptRequest =
            serde_json::from_value(json!({"prompt": "Hi", "temperature": 0.2})).unwrap();

        assert_eq!(request.temperature, 0.2);
    }

    #[test]
    fn test_prompt_request_missing_prompt_fails() {
        let result: Result<PromptRequest, _> =
            serde_json::from_value(json!({"temperature": 0.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_prompt_request_wrong_prompt_type_fails() {
        let result: Result<PromptRequest, _> = serde_json::from_value(json!({"prompt": 42}));
        assert!(result.is_err());
    }
}
