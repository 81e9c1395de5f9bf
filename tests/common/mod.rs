//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base url.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", address)
}

/// Base url of a port nothing listens on.
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}

pub fn question_pool(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "category": "Entertainment: Film",
                "type": "multiple",
                "difficulty": "easy",
                "question": format!("Which film is number {}? &quot;Guess&quot;", i),
                "correct_answer": format!("Film &amp; {}", i),
                "incorrect_answers": [
                    format!("Wrong {}a", i),
                    format!("Wrong {}b", i),
                    format!("Wrong {}c", i),
                ],
            })
        })
        .collect();

    json!({ "response_code": 0, "results": results })
}

pub fn questions_router(count: usize) -> Router {
    let body = question_pool(count);
    Router::new().route("/api/questions", get(move || async move { Json(body) }))
}

pub fn failing_router() -> Router {
    Router::new()
        .route(
            "/api/questions",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
        )
        .route(
            "/chat",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        )
}

pub fn malformed_router() -> Router {
    Router::new()
        .route("/api/questions", get(|| async { "<html>not json</html>" }))
        .route("/chat", post(|| async { Json(json!({ "answer": "wrong field" })) }))
}

pub fn echo_chat_router() -> Router {
    Router::new().route(
        "/chat",
        post(|Json(body): Json<Value>| async move {
            let user = body["user"].as_str().unwrap_or_default().to_string();
            let message = body["message"].as_str().unwrap_or_default().to_string();
            Json(json!({ "reply": format!("{} disse: <strong>{}</strong>", user, message) }))
        }),
    )
}
