// tests/common/mod.rs
#![allow(dead_code)]

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const ENDPOINT: &str = "/api/job-recommendations";

/// Canned reply of the stub recommendation service
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
}

impl StubReply {
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: r#"{"detail":"boom"}"#.to_string(),
        }
    }
}

pub struct StubService {
    pub base_url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

/// Start a stub service on an ephemeral port that answers every POST to
/// the recommendations endpoint with `reply`.
pub async fn start_stub(reply: StubReply) -> StubService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let seen = received.clone();

    let app = Router::new().route(
        ENDPOINT,
        post(move |Json(body): Json<Value>| {
            let reply = reply.clone();
            let seen = seen.clone();
            async move {
                seen.lock().unwrap().push(body);
                (
                    reply.status,
                    [("content-type", "application/json")],
                    reply.body,
                )
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService {
        base_url: format!("http://{}", addr),
        received,
    }
}

/// Base URL where nothing is listening
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
