//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use locator_api::AppState;
use locator_core::config::AppConfig;
use locator_core::traits::{FixedClock, FixedIndexSource};
use locator_database::memory::MemoryPresenceStore;
use locator_database::store::PresenceStore;

/// The day every test app believes it is.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test app over a fresh in-memory store
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryPresenceStore::new()))
    }

    /// Create a test app over the given store
    pub fn with_store(store: Arc<dyn PresenceStore>) -> Self {
        let state = AppState::new(
            AppConfig::default(),
            store,
            Arc::new(FixedClock(today())),
            Arc::new(FixedIndexSource(0)),
        )
        .expect("Failed to build app state");

        Self {
            router: locator_api::build_app(state),
        }
    }

    /// Register a user through the API
    pub async fn register(&self, username: &str, full_name: Option<&str>) -> TestResponse {
        self.request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "username": username,
                "full_name": full_name,
            })),
        )
        .await
    }

    /// Report a location through the API
    pub async fn report(&self, username: &str, is_in_office: bool, room: Option<&str>) -> TestResponse {
        self.request(
            "PUT",
            &format!("/api/users/{username}/location"),
            Some(serde_json::json!({
                "is_in_office": is_in_office,
                "room": room,
            })),
        )
        .await
    }

    /// Send one voice turn
    pub async fn voice(&self, body: Value) -> TestResponse {
        self.request("POST", "/api/voice", Some(body)).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Build a voice intent turn
pub fn intent_turn(name: &str, person: Option<&str>, confirmation: &str, session: Value) -> Value {
    let slots = match person {
        Some(p) => serde_json::json!({ "name": p }),
        None => serde_json::json!({}),
    };
    serde_json::json!({
        "request": {
            "type": "intent",
            "intent": {
                "name": name,
                "slots": slots,
                "confirmation_status": confirmation,
            },
            "dialog_state": "completed",
        },
        "session": session,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}
