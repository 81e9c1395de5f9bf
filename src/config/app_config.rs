use core::fmt;
use std::env;

use ::config::{Config, Environment, File};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::models::error::ClientError;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("{}", e)));

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Runtime {
    Dev,
    Prod,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Dev => write!(f, "development"),
            Runtime::Prod => write!(f, "production"),
        }
    }
}

impl From<String> for Runtime {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRODUCTION" => Runtime::Prod,
            _ => Runtime::Dev,
        }
    }
}

fn default_runtime() -> Runtime {
    Runtime::Dev
}

fn default_quiz_endpoint() -> String {
    "http://localhost:3000/api/questions".into()
}

fn default_pool_size() -> usize {
    5
}

fn default_chat_endpoint() -> String {
    "http://localhost:5000/chat".into()
}

fn default_error_message() -> String {
    "❌ Erro: não foi possível conectar ao servidor.".into()
}

fn default_user_prefix() -> String {
    "usuario".into()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default = "default_runtime")]
    pub runtime: Runtime,
    #[serde(default)]
    #[validate(nested)]
    pub quiz: QuizConfig,
    #[serde(default)]
    #[validate(nested)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizConfig {
    #[serde(default = "default_quiz_endpoint")]
    #[validate(url)]
    pub endpoint: String,
    #[serde(default = "default_pool_size")]
    #[validate(range(min = 1))]
    pub pool_size: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: default_quiz_endpoint(),
            pool_size: default_pool_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatConfig {
    #[serde(default = "default_chat_endpoint")]
    #[validate(url)]
    pub endpoint: String,
    #[serde(default = "default_error_message")]
    pub error_message: String,
    #[serde(default = "default_user_prefix")]
    #[validate(length(min = 1))]
    pub user_prefix: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_chat_endpoint(),
            error_message: default_error_message(),
            user_prefix: default_user_prefix(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            quiz: QuizConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ClientError> {
        let runtime: Runtime = env::var("ENVIRONMENT").unwrap_or_default().into();

        let config = Config::builder()
            .set_default("runtime", format!("{:?}", runtime))?
            .add_source(File::with_name(&format!("config/{}", runtime)).required(false))
            .add_source(
                Environment::with_prefix("QUIZ_RELAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ClientError> {
        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;

        debug!(
            "Loaded config: {}",
            serde_json::to_string_pretty(&config)?
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sources_fall_back_to_defaults() {
        let config = AppConfig::from_config(Config::builder().build().unwrap()).unwrap();

        assert_eq!(config.runtime, Runtime::Dev);
        assert_eq!(config.quiz.endpoint, "http://localhost:3000/api/questions");
        assert_eq!(config.quiz.pool_size, 5);
        assert_eq!(config.chat.endpoint, "http://localhost:5000/chat");
        assert_eq!(config.chat.user_prefix, "usuario");
    }

    #[test]
    fn overrides_are_applied() {
        let source = Config::builder()
            .set_override("quiz.pool_size", 10)
            .unwrap()
            .set_override("chat.endpoint", "http://chat.internal:8080/chat")
            .unwrap()
            .build()
            .unwrap();

        let config = AppConfig::from_config(source).unwrap();
        assert_eq!(config.quiz.pool_size, 10);
        assert_eq!(config.chat.endpoint, "http://chat.internal:8080/chat");
        assert_eq!(config.quiz.endpoint, "http://localhost:3000/api/questions");
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let source = Config::builder()
            .set_override("quiz.pool_size", 0)
            .unwrap()
            .build()
            .unwrap();

        let result = AppConfig::from_config(source);
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let source = Config::builder()
            .set_override("chat.endpoint", "not a url")
            .unwrap()
            .build()
            .unwrap();

        assert!(AppConfig::from_config(source).is_err());
    }

    #[test]
    fn runtime_parses_from_environment_value() {
        assert_eq!(Runtime::from("PRODUCTION".to_string()), Runtime::Prod);
        assert_eq!(Runtime::from(String::new()), Runtime::Dev);
        assert_eq!(Runtime::Prod.to_string(), "production");
    }
}
