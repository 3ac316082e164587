use chrono::{DateTime, SecondsFormat, Utc};

/// One prompt/response exchange, stamped at creation time.
#[derive(Debug, Clone)]
pub struct Entry {
    pub prompt: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(prompt: String, response: String) -> Self {
        Self {
            prompt,
            response,
            created_at: Utc::now(),
        }
    }

    /// Renders the entry as one log block, blank-line terminated.
    pub fn render(&self) -> String {
        format!(
            "[{}]\nPrompt: {}\nResponse: {}\n\n",
            self.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            self.prompt,
            self.response
        )
    }
}
