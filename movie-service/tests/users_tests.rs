mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/users")
        .json(&json!({
            "name": "Nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_get_user() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_in_user().await;

    let response = app
        .post_authenticated("/users", &token)
        .json(&json!({
            "name": "  Ada  ",
            "email": "ada@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("id is an integer");

    let response = app
        .get_authenticated(&format!("/users/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "id": id, "name": "Ada", "email": "ada@example.com" })
    );
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::spawn().await;
    let (caller_id, token) = app.signed_in_user().await;
    let other_id = app.sign_up("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/users", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|user| user["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![caller_id, other_id]);
}

#[tokio::test]
async fn test_get_user_not_found_and_bad_id() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_in_user().await;

    let missing = app
        .get_authenticated("/users/9999", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let malformed = app
        .get_authenticated("/users/abc", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user() {
    let app = TestApp::spawn().await;
    let (id, token) = app.signed_in_user().await;

    let response = app
        .put_authenticated(&format!("/users/{}", id), &token)
        .json(&json!({ "name": "Renamed", "email": "renamed@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "id": id, "name": "Renamed", "email": "renamed@example.com" })
    );

    // Sign-in follows the new email
    app.sign_in("renamed@example.com", "pass_word!").await;
}

#[tokio::test]
async fn test_update_user_email_conflict() {
    let app = TestApp::spawn().await;
    let (id, token) = app.signed_in_user().await;
    app.sign_up("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .put_authenticated(&format!("/users/{}", id), &token)
        .json(&json!({ "name": "Renamed", "email": "ada@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_in_user().await;
    let other_id = app.sign_up("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .delete_authenticated(&format!("/users/{}", other_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let again = app
        .delete_authenticated(&format!("/users/{}", other_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
