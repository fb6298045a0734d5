use std::{env, time::Duration};

const DEFAULT_ENDPOINT: &str = "https://api.groq.com/v1/chat";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chat endpoint settings. The credential is always injected from the
/// environment, never embedded in the chat component.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let endpoint = env::var("CHAT_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let api_key = env::var("CHAT_API_KEY").unwrap_or_default();
        let timeout_secs = env::var("CHAT_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            endpoint,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
