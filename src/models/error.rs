use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Api error: {0} - {1}")]
    Api(StatusCode, String),

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid config: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Question source returned no questions")]
    EmptyPool,

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) => "Não foi possível conectar ao servidor.".to_string(),
            ClientError::Api(status, _) => format!("O servidor respondeu com {}", status),
            ClientError::Json(_) => "Resposta inválida do servidor.".to_string(),
            ClientError::EmptyPool => "Nenhuma pergunta disponível.".to_string(),
            ClientError::Config(e) => format!("Configuração inválida: {}", e),
            ClientError::Validation(e) => format!("Configuração inválida: {}", e),
            ClientError::Io(e) => format!("Erro de entrada/saída: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_shows_status_and_body() {
        let error = ClientError::Api(StatusCode::BAD_GATEWAY, "upstream down".into());
        assert_eq!(error.to_string(), "Api error: 502 Bad Gateway - upstream down");
        assert!(error.user_message().contains("502"));
    }

    #[test]
    fn empty_pool_has_user_message() {
        assert_eq!(
            ClientError::EmptyPool.user_message(),
            "Nenhuma pergunta disponível."
        );
    }
}
