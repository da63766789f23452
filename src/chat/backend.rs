use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Chat endpoint returned HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Body of a successful reply; `response` may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// JSON client for the assistant endpoint
#[derive(Debug, Clone)]
pub struct ChatBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl ChatBackend {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Client with a whole-request timeout
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, endpoint))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"message": ...}`; any non-2xx status is an error
    pub async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ChatError::Status(resp.status().as_u16()));
        }

        Ok(resp.json().await?)
    }
}
