//! Shared mock shortener backend for integration tests.
//!
//! Records every request it receives so tests can assert which endpoints
//! were hit and with which form fields.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::{get, post},
    Form, Router,
};

pub type FormFields = HashMap<String, String>;

#[derive(Clone)]
pub struct MockBackend {
    validate_status: u16,
    shorten_status: u16,
    shorten_body: String,
    analytics_status: u16,
    analytics_body: String,
    validate_hits: Arc<Mutex<Vec<FormFields>>>,
    shorten_hits: Arc<Mutex<Vec<FormFields>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            validate_status: 200,
            shorten_status: 200,
            shorten_body: r#"{"shortUrl":"abc123"}"#.to_string(),
            analytics_status: 200,
            analytics_body: r#"{"total_click_counts":0,"day":{}}"#.to_string(),
            validate_hits: Arc::new(Mutex::new(Vec::new())),
            shorten_hits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn validate_status(mut self, status: u16) -> Self {
        self.validate_status = status;
        self
    }

    pub fn shorten_status(mut self, status: u16) -> Self {
        self.shorten_status = status;
        self
    }

    pub fn shorten_body(mut self, body: &str) -> Self {
        self.shorten_body = body.to_string();
        self
    }

    pub fn analytics(mut self, status: u16, body: &str) -> Self {
        self.analytics_status = status;
        self.analytics_body = body.to_string();
        self
    }

    pub fn validate_calls(&self) -> usize {
        self.validate_hits.lock().unwrap().len()
    }

    pub fn shorten_calls(&self) -> Vec<FormFields> {
        self.shorten_hits.lock().unwrap().clone()
    }

    /// Binds the backend to an ephemeral port and returns its base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/validate", post(validate))
            .route("/shorten", post(shorten))
            .route("/analytics/{short_url}", get(analytics))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend died");
        });

        format!("http://{}", addr)
    }
}

/// A base URL nothing is listening on, for transport-failure tests.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

async fn validate(
    State(state): State<MockBackend>,
    Form(fields): Form<FormFields>,
) -> StatusCode {
    state.validate_hits.lock().unwrap().push(fields);
    StatusCode::from_u16(state.validate_status).unwrap()
}

async fn shorten(
    State(state): State<MockBackend>,
    Form(fields): Form<FormFields>,
) -> (StatusCode, String) {
    state.shorten_hits.lock().unwrap().push(fields);
    (
        StatusCode::from_u16(state.shorten_status).unwrap(),
        state.shorten_body.clone(),
    )
}

async fn analytics(
    State(state): State<MockBackend>,
    Path(_short_url): Path<String>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    (
        StatusCode::from_u16(state.analytics_status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        state.analytics_body.clone(),
    )
}
