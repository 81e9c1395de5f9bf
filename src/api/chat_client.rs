use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::models::{
    chat::{ChatReply, ChatRequest},
    error::ClientError,
};

#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatReply, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpChatClient {
    endpoint: String,
    client: Client,
}

impl HttpChatClient {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatClient {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        debug!("Posting chat message for {}", request.user);
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!("Chat request failed: {} - {}", status, body);
            return Err(ClientError::Api(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
