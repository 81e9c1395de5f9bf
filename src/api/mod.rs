pub mod chat_client;
pub mod quiz_source;
