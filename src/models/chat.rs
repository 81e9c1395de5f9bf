use core::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: String,
}

impl TranscriptEntry {
    pub fn display(&self) -> String {
        match self.role {
            Role::User => format!("Você: {}", self.text),
            Role::Bot => self.text.clone(),
        }
    }
}

/// Lives for one run of the client. The user id never changes and the
/// transcript is append-only.
#[derive(Debug)]
pub struct ChatSession {
    user_id: String,
    transcript: Vec<TranscriptEntry>,
    scroll_position: Option<usize>,
}

impl ChatSession {
    pub fn new(user_prefix: &str) -> Self {
        Self::with_user_id(format!(
            "{}-{}",
            user_prefix,
            Utc::now().timestamp_millis()
        ))
    }

    pub fn with_user_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            transcript: vec![],
            scroll_position: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn scroll_position(&self) -> Option<usize> {
        self.scroll_position
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>) -> &TranscriptEntry {
        self.transcript.push(TranscriptEntry {
            role,
            text: text.into(),
        });
        &self.transcript[self.transcript.len() - 1]
    }

    pub fn scroll_to_latest(&mut self) {
        self.scroll_position = self.transcript.len().checked_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_uses_prefix() {
        let session = ChatSession::new("usuario");
        let (prefix, millis) = session.user_id().split_once('-').unwrap();
        assert_eq!(prefix, "usuario");
        assert!(millis.parse::<i64>().is_ok());
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = ChatRequest {
            user: "usuario-1".into(),
            message: "terror".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"user": "usuario-1", "message": "terror"})
        );
    }

    #[test]
    fn user_entries_display_with_prefix() {
        let mut session = ChatSession::with_user_id("u");
        let entry = session.push(Role::User, "oi").clone();
        assert_eq!(entry.display(), "Você: oi");

        session.push(Role::Bot, "Olá");
        session.scroll_to_latest();
        assert_eq!(session.scroll_position(), Some(1));
    }
}
