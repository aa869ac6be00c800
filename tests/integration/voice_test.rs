//! Integration tests for the voice dialog endpoint.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::{Value, json};

use locator_core::config::VoiceConfig;
use locator_core::error::AppError;
use locator_core::result::AppResult;
use locator_database::store::{ConditionalWrite, PresenceStore};
use locator_entity::presence::{PresenceChange, UserPresenceRecord};

const IN_OFFICE: &str = "PersonIsInOfficeIntent";
const WHERE_IS: &str = "WhereIsPersonIntent";
const CAME_TODAY: &str = "PersonCameToWorkToday";

fn fresh_session() -> Value {
    json!({})
}

#[tokio::test]
async fn test_launch_greets() {
    let app = helpers::TestApp::new().await;
    let response = app
        .voice(json!({ "request": { "type": "launch" } }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["speech"], VoiceConfig::default().greeting);
    assert_eq!(response.body["should_end_session"], true);
}

#[tokio::test]
async fn test_where_is_known_room() {
    let app = helpers::TestApp::new().await;
    app.register("alice", Some("Alice")).await;
    app.report("alice", true, Some("Lab")).await;

    let response = app
        .voice(helpers::intent_turn(WHERE_IS, Some("alice"), "none", fresh_session()))
        .await;
    assert_eq!(response.body["speech"], "Alice is in room lab.");
    assert_eq!(response.body["session"]["phase"], "responded");
}

#[tokio::test]
async fn test_where_is_out_of_office() {
    let app = helpers::TestApp::new().await;
    app.register("bob", None).await;

    let response = app
        .voice(helpers::intent_turn(WHERE_IS, Some("Bob"), "none", fresh_session()))
        .await;
    assert_eq!(response.body["speech"], "bob has not arrived at the office yet.");
}

#[tokio::test]
async fn test_is_in_office_yes_and_no() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;
    app.register("bob", None).await;
    app.report("alice", true, Some("kitchen")).await;

    let yes = app
        .voice(helpers::intent_turn(IN_OFFICE, Some("alice"), "none", fresh_session()))
        .await;
    let no = app
        .voice(helpers::intent_turn(IN_OFFICE, Some("bob"), "none", fresh_session()))
        .await;

    assert_eq!(yes.body["speech"], "Yep, alice is here.");
    assert_eq!(no.body["speech"], "Nope, bob is not here.");
}

#[tokio::test]
async fn test_came_today_uses_check_in_date() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;
    app.register("bob", None).await;
    app.report("alice", true, Some("lab")).await;
    app.report("alice", false, None).await;

    let alice = app
        .voice(helpers::intent_turn(CAME_TODAY, Some("alice"), "none", fresh_session()))
        .await;
    let bob = app
        .voice(helpers::intent_turn(CAME_TODAY, Some("bob"), "none", fresh_session()))
        .await;

    assert_eq!(alice.body["speech"], "Yes, alice is in the office today.");
    assert_eq!(bob.body["speech"], "bob does not seem to be coming to work today.");
}

#[tokio::test]
async fn test_came_today_delegates_while_slots_are_filled() {
    let app = helpers::TestApp::new().await;
    let response = app
        .voice(json!({
            "request": {
                "type": "intent",
                "intent": { "name": CAME_TODAY },
                "dialog_state": "started",
            },
        }))
        .await;

    assert_eq!(response.body["directive"]["type"], "delegate");
    assert_eq!(response.body["should_end_session"], false);
}

#[tokio::test]
async fn test_fuzzy_confirmation_round_trip() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;
    app.register("bob", None).await;
    app.report("alice", true, Some("lab")).await;

    let prompt = app
        .voice(helpers::intent_turn(WHERE_IS, Some("alise"), "none", fresh_session()))
        .await;
    assert_eq!(prompt.body["speech"], "I did not find alise, do you mean alice?");
    assert_eq!(prompt.body["directive"]["type"], "confirm_intent");
    assert_eq!(prompt.body["directive"]["intent"]["slots"]["name"], "alice");
    assert_eq!(prompt.body["session"]["phase"], "needs_confirmation");

    let answer = app
        .voice(helpers::intent_turn(
            WHERE_IS,
            Some("alise"),
            "confirmed",
            prompt.body["session"].clone(),
        ))
        .await;
    assert_eq!(answer.body["speech"], "alice is in room lab.");
    assert_eq!(answer.body["session"]["phase"], "responded");
    assert!(answer.body["session"]["pending"].is_null());
}

#[tokio::test]
async fn test_denied_confirmation() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;

    let prompt = app
        .voice(helpers::intent_turn(IN_OFFICE, Some("alica"), "none", fresh_session()))
        .await;
    let answer = app
        .voice(helpers::intent_turn(
            IN_OFFICE,
            Some("alice"),
            "denied",
            prompt.body["session"].clone(),
        ))
        .await;

    assert_eq!(answer.body["speech"], "Then I cannot help you!");
    assert_eq!(answer.body["should_end_session"], true);
}

#[tokio::test]
async fn test_unknown_person_with_empty_store() {
    let app = helpers::TestApp::new().await;
    let response = app
        .voice(helpers::intent_turn(IN_OFFICE, Some("zed"), "none", fresh_session()))
        .await;

    assert_eq!(response.body["speech"], VoiceConfig::default().unknown_person);
    assert!(response.body.get("directive").is_none());
}

#[tokio::test]
async fn test_unrecognized_intent() {
    let app = helpers::TestApp::new().await;
    let response = app
        .voice(helpers::intent_turn("BookMeetingRoomIntent", Some("alice"), "none", fresh_session()))
        .await;
    assert_eq!(response.body["speech"], VoiceConfig::default().not_understood);
}

/// A store whose backend is always down.
#[derive(Debug)]
struct UnreachableStore;

#[async_trait]
impl PresenceStore for UnreachableStore {
    async fn get(&self, _username: &str) -> AppResult<Option<UserPresenceRecord>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn put_new(&self, _record: &UserPresenceRecord) -> AppResult<()> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn update_if_room_differs(
        &self,
        _username: &str,
        _change: &PresenceChange,
    ) -> AppResult<ConditionalWrite> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn scan_usernames(&self) -> AppResult<Vec<String>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::store_unavailable("connection refused"))
    }
}

#[tokio::test]
async fn test_store_outage_is_spoken_not_raised() {
    let app = helpers::TestApp::with_store(Arc::new(UnreachableStore));

    let voice = app
        .voice(helpers::intent_turn(IN_OFFICE, Some("alice"), "none", fresh_session()))
        .await;
    assert_eq!(voice.status, StatusCode::OK);
    assert_eq!(voice.body["speech"], VoiceConfig::default().unavailable);

    let update = app.report("alice", true, Some("lab")).await;
    assert_eq!(update.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(update.body["retryable"], true);

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::SERVICE_UNAVAILABLE);
}
