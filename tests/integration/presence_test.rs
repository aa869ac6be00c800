//! Integration tests for registration and presence updates.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_and_fetch() {
    let app = helpers::TestApp::new().await;

    let response = app.register("Alice", Some("Alice Smith")).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["username"], "alice");
    assert_eq!(response.data()["room"], "out");
    assert_eq!(response.data()["is_in_office"], false);

    let response = app.request("GET", "/api/users/ALICE", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["full_name"], "Alice Smith");
    assert_eq!(response.data()["room_history"], serde_json::json!([]));
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = helpers::TestApp::new().await;
    app.register("bob", None).await;

    let response = app.register("BOB", None).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "ALREADY_EXISTS");
    assert_eq!(response.body["retryable"], false);
}

#[tokio::test]
async fn test_blank_username_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.register("", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.register("   ", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_repeated_report_is_unchanged() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;

    let first = app.report("alice", true, Some("Kitchen")).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.data()["outcome"], "applied");

    let second = app.report("alice", true, Some("kitchen")).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.data()["outcome"], "unchanged");

    let record = app.request("GET", "/api/users/alice", None).await;
    assert_eq!(record.data()["room"], "kitchen");
    assert_eq!(record.data()["room_history"], serde_json::json!(["kitchen"]));
    assert_eq!(
        record.data()["last_present_date"],
        helpers::today().to_string()
    );
}

#[tokio::test]
async fn test_leaving_records_out() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;
    app.report("alice", true, Some("lab")).await;

    let response = app.report("alice", false, Some("lab")).await;
    assert_eq!(response.data()["outcome"], "applied");

    let record = app.request("GET", "/api/users/alice", None).await;
    assert_eq!(record.data()["is_in_office"], false);
    assert_eq!(record.data()["room"], "out");
    assert_eq!(record.data()["room_history"], serde_json::json!(["lab", "out"]));
}

#[tokio::test]
async fn test_present_without_room_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;

    let response = app.report("alice", true, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("room")
    );
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.report("ghost", true, Some("lab")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/users/ghost", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/users/ghost/favorite-room", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_favorite_room() {
    let app = helpers::TestApp::new().await;
    app.register("alice", None).await;

    let response = app.request("GET", "/api/users/alice/favorite-room", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["favorite_room"].is_null());

    for (present, room) in [
        (true, "kitchen"),
        (true, "lab"),
        (true, "kitchen"),
        (false, "kitchen"),
        (true, "lab"),
    ] {
        app.report("alice", present, Some(room)).await;
    }

    // kitchen 2, lab 2, out 1: the first room to reach the top count wins.
    let response = app.request("GET", "/api/users/alice/favorite-room", None).await;
    assert_eq!(response.data()["favorite_room"], "kitchen");
}

#[tokio::test]
async fn test_list_users_sorted() {
    let app = helpers::TestApp::new().await;
    for name in ["carol", "alice", "bob"] {
        app.register(name, None).await;
    }

    let response = app.request("GET", "/api/users", None).await;
    assert_eq!(
        response.data()["usernames"],
        serde_json::json!(["alice", "bob", "carol"])
    );
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], "memory");
}
