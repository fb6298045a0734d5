use crate::config::ChatConfig;
use crate::models::{ChatMessage, Sender};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again later.";

pub type ChatHistory = Arc<Mutex<Vec<ChatMessage>>>;

#[derive(Debug, Serialize)]
struct ChatApiRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatApiResponse {
    response: String,
}

#[derive(Clone)]
pub struct ChatClient {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint: config.endpoint,
            api_key: config.api_key,
            http,
        })
    }

    /// Sends one user message. The user message is appended before the remote
    /// call; the bot reply (or the fallback text on any failure) is appended
    /// to whatever the history contains once the call resolves, so concurrent
    /// sends never lose each other's messages. Whitespace-only text is a
    /// no-op.
    pub async fn send(&self, history: &ChatHistory, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        {
            let mut messages = history.lock().await;
            messages.push(ChatMessage {
                text: text.to_string(),
                sender: Sender::User,
            });
        }

        // The lock is not held across the request.
        let reply = match self.request_reply(text).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("chat request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        };

        let mut messages = history.lock().await;
        messages.push(ChatMessage {
            text: reply,
            sender: Sender::Bot,
        });
    }

    async fn request_reply(&self, text: &str) -> Result<String, reqwest::Error> {
        let payload: ChatApiResponse = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatApiRequest { message: text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload.response)
    }
}
