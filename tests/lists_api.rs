//! Todo list API integration tests
//!
//! Covers creation, the per-user cap, sorting, partial updates and the
//! ownership scoping of every list endpoint.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{create_unique_test_user, send, test_app, TestUser};

async fn create_list(app: &axum::Router, user: &TestUser, title: &str, description: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/lists",
        Some(&user.token),
        Some(json!({ "title": title, "description": description })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body["id"].as_str().unwrap().to_string()
}

fn titles(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|list| list["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_and_get_list() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;
    let id = create_list(&app, &user, "groceries", "weekly").await;

    let (status, body) = send(&app, Method::GET, &format!("/api/lists/{}", id), Some(&user.token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["title"], "groceries");
    assert_eq!(body["description"], "weekly");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_list_validation() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/lists",
        Some(&user.token),
        Some(json!({"title": "ab", "description": "weekly"})),
    )
    .await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "title length is too short");

    let response = send(
        &app,
        Method::POST,
        "/api/lists",
        Some(&user.token),
        Some(json!({"title": "groceries", "description": "w"})),
    )
    .await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "description length is too short");
}

#[tokio::test]
async fn test_list_cap() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;

    for i in 0..5 {
        create_list(&app, &user, &format!("list {}", i), "something").await;
    }

    let response = send(
        &app,
        Method::POST,
        "/api/lists",
        Some(&user.token),
        Some(json!({"title": "one more", "description": "something"})),
    )
    .await;
    assert_error_response!(
        response,
        StatusCode::BAD_REQUEST,
        "exceeded the maximum allowed limit of existing lists"
    );

    // The cap is per user
    let other = create_unique_test_user(&app).await;
    create_list(&app, &other, "first", "something").await;
}

#[tokio::test]
async fn test_get_all_lists_empty_is_not_found() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;

    let response = send(&app, Method::GET, "/api/lists", Some(&user.token), None).await;

    assert_error_response!(response, StatusCode::NOT_FOUND, "no todo lists found");
}

#[tokio::test]
async fn test_get_all_lists_sorting() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;
    for (title, description) in [("bravo", "second"), ("alpha", "first"), ("charlie", "third")] {
        create_list(&app, &user, title, description).await;
        // Distinct creation instants
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let (status, body) = send(&app, Method::GET, "/api/lists", Some(&user.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(titles(&body), vec!["bravo", "alpha", "charlie"]);

    let (_, body) = send(&app, Method::GET, "/api/lists?sort_by=title", Some(&user.token), None).await;
    assert_eq!(titles(&body), vec!["alpha", "bravo", "charlie"]);

    let (_, body) = send(&app, Method::GET, "/api/lists?sort_by=-title", Some(&user.token), None).await;
    assert_eq!(titles(&body), vec!["charlie", "bravo", "alpha"]);

    let (_, body) = send(&app, Method::GET, "/api/lists?sort_by=-createdAt", Some(&user.token), None).await;
    assert_eq!(titles(&body), vec!["charlie", "alpha", "bravo"]);

    // Unknown fields fall back to the default order
    let (_, body) = send(&app, Method::GET, "/api/lists?sort_by=password", Some(&user.token), None).await;
    assert_eq!(titles(&body), vec!["bravo", "alpha", "charlie"]);
}

#[tokio::test]
async fn test_partial_update() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;
    let id = create_list(&app, &user, "groceries", "weekly").await;
    let uri = format!("/api/lists/{}", id);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(&user.token), Some(json!({"description": "new"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &uri, Some(&user.token), None).await;
    assert_eq!(body["title"], "groceries");
    assert_eq!(body["description"], "new");
}

#[tokio::test]
async fn test_update_rejections() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;
    let id = create_list(&app, &user, "groceries", "weekly").await;
    let uri = format!("/api/lists/{}", id);

    let response = send(&app, Method::PATCH, &uri, Some(&user.token), Some(json!({}))).await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "there is no values to update");

    let response = send(&app, Method::PATCH, &uri, Some(&user.token), Some(json!({"title": ""}))).await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "title length is too short");

    let response = send(
        &app,
        Method::PATCH,
        "/api/lists/not-a-uuid",
        Some(&user.token),
        Some(json!({"title": "whatever"})),
    )
    .await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "invalid id");
}

#[tokio::test]
async fn test_foreign_list_is_indistinguishable_from_missing() {
    let app = test_app();
    let owner = create_unique_test_user(&app).await;
    let intruder = create_unique_test_user(&app).await;
    let id = create_list(&app, &owner, "groceries", "weekly").await;

    let foreign = format!("/api/lists/{}", id);
    let missing = format!("/api/lists/{}", uuid::Uuid::new_v4());

    for uri in [&foreign, &missing] {
        let response = send(&app, Method::GET, uri, Some(&intruder.token), None).await;
        assert_error_response!(response, StatusCode::NOT_FOUND, "todo list not found");

        let response = send(&app, Method::PATCH, uri, Some(&intruder.token), Some(json!({"title": "mine now"}))).await;
        assert_error_response!(response, StatusCode::NOT_FOUND, "todo list not found");

        let (status, _) = send(&app, Method::DELETE, uri, Some(&intruder.token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    // Untouched for its owner
    let (status, body) = send(&app, Method::GET, &foreign, Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "groceries");
}

#[tokio::test]
async fn test_delete_is_idempotent_and_cascades() {
    let app = test_app();
    let user = create_unique_test_user(&app).await;
    let id = create_list(&app, &user, "groceries", "weekly").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/lists/{}/items", id),
        Some(&user.token),
        Some(json!({"title": "milk", "description": "two litres"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = body["id"].as_str().unwrap().to_string();

    let uri = format!("/api/lists/{}", id);
    for _ in 0..2 {
        let (status, body) = send(&app, Method::DELETE, &uri, Some(&user.token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    let (status, _) = send(&app, Method::GET, &uri, Some(&user.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = send(&app, Method::GET, &format!("/api/items/{}", item_id), Some(&user.token), None).await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "todo item not found");
}
