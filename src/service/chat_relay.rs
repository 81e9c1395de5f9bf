use tracing::{debug, error};

use crate::{
    api::chat_client::ChatEndpoint,
    models::chat::{ChatRequest, ChatSession, Role, TranscriptEntry},
};

pub struct ChatRelay<C> {
    endpoint: C,
    session: ChatSession,
    error_message: String,
}

impl<C: ChatEndpoint> ChatRelay<C> {
    pub fn new(endpoint: C, session: ChatSession, error_message: impl Into<String>) -> Self {
        Self {
            endpoint,
            session,
            error_message: error_message.into(),
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.session.transcript()
    }

    /// Sends one message and returns the entries it added. Blank input adds
    /// nothing and makes no request. Failures become a bot entry.
    pub async fn send(&mut self, message: &str) -> &[TranscriptEntry] {
        let start = self.session.transcript().len();
        if message.trim().is_empty() {
            debug!("Ignoring empty chat message");
            return &self.session.transcript()[start..];
        }

        self.session.push(Role::User, message);

        let request = ChatRequest {
            user: self.session.user_id().to_string(),
            message: message.to_string(),
        };

        match self.endpoint.exchange(&request).await {
            Ok(reply) => {
                self.session.push(Role::Bot, reply.reply);
                self.session.scroll_to_latest();
            }
            Err(e) => {
                error!("Chat exchange failed: {}", e);
                let text = self.error_message.clone();
                self.session.push(Role::Bot, text);
            }
        }

        &self.session.transcript()[start..]
    }
}
