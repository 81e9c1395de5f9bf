use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::models::{
    error::ClientError,
    question::{Question, QuestionsResponse},
};

/// Supplies the pool of candidate questions for a quiz session.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_pool(&self) -> Result<Vec<Question>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    endpoint: String,
    client: Client,
}

impl HttpQuestionSource {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_pool(&self) -> Result<Vec<Question>, ClientError> {
        debug!("Fetching question pool from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!("Question source request failed: {} - {}", status, body);
            return Err(ClientError::Api(status, body));
        }

        let payload: QuestionsResponse = serde_json::from_str(&body)?;
        debug!("Question source returned {} questions", payload.results.len());
        Ok(payload.results)
    }
}
