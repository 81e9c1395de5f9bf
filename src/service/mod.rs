pub mod chat_relay;
pub mod quiz_controller;
pub mod shuffle;
pub mod text;
