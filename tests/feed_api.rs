//! Feed surface integration tests
//!
//! Black-box tests for the post service: create, list ordering, and the
//! like-idempotency contract, plus the end-to-end scenario across both
//! services sharing one store.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use feedline::feed::db;

use common::{
    auth_server, bearer, create_test_user, feed_server, test_pool, test_state, token_for,
};

#[tokio::test]
async fn create_post_round_trip() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "alice", "pass123").await;
    let token = token_for(&user);
    let server = feed_server(test_state(pool));

    let response = server
        .post("/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "message": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "hello");
    assert!(body["id"].is_string());
    assert!(body["publishedAt"].is_string());
}

#[tokio::test]
async fn create_post_rejects_empty_and_whitespace_messages() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "alice", "pass123").await;
    let token = token_for(&user);
    let server = feed_server(test_state(pool));

    for message in [json!(""), json!("   \n\t"), serde_json::Value::Null] {
        let response = server
            .post("/posts")
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&json!({ "message": message }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn feed_routes_require_authentication() {
    let pool = test_pool().await;
    let server = feed_server(test_state(pool));

    let unauthenticated = server.post("/posts").json(&json!({ "message": "hi" })).await;
    assert_eq!(unauthenticated.status_code(), StatusCode::UNAUTHORIZED);

    let wrong_scheme = server
        .get("/posts")
        .add_header(
            AUTHORIZATION,
            axum::http::HeaderValue::from_static("Basic xyz"),
        )
        .await;
    assert_eq!(wrong_scheme.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn service_status_is_public() {
    let pool = test_pool().await;
    let server = feed_server(test_state(pool));

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn feed_is_sorted_newest_first() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "alice", "pass123").await;
    let token = token_for(&user);

    // Insert out of chronological order; the feed must sort by
    // publication time, not insertion order.
    let base = Utc::now();
    db::insert_post(&pool, user.id, "middle", base - Duration::minutes(5))
        .await
        .unwrap();
    db::insert_post(&pool, user.id, "oldest", base - Duration::minutes(10))
        .await
        .unwrap();
    db::insert_post(&pool, user.id, "newest", base).await.unwrap();

    let server = feed_server(test_state(pool));
    let response = server
        .get("/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let posts = body["posts"].as_array().expect("posts array");

    let messages: Vec<&str> = posts
        .iter()
        .map(|p| p["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["newest", "middle", "oldest"]);

    for post in posts {
        assert_eq!(post["author"], "alice");
        assert_eq!(post["authorName"], "alice");
        assert_eq!(post["likeCount"], 0);
    }
}

#[tokio::test]
async fn like_is_idempotent() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "alice", "pass123").await;
    let token = token_for(&user);
    let post = db::insert_post(&pool, user.id, "hello", Utc::now())
        .await
        .unwrap();

    let server = feed_server(test_state(pool.clone()));
    let path = format!("/posts/{}/like", post.id);

    for _ in 0..3 {
        let response = server
            .post(&path)
            .add_header(AUTHORIZATION, bearer(&token))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        // Every call returns the steady-state total, never a delta.
        assert_eq!(body["likeCount"], 1);
    }

    assert_eq!(db::count_likes(&pool, post.id).await.unwrap(), 1);
}

#[tokio::test]
async fn likes_from_distinct_users_accumulate() {
    let pool = test_pool().await;
    let alice = create_test_user(&pool, "alice", "pass123").await;
    let bob = create_test_user(&pool, "bob", "pass456").await;
    let post = db::insert_post(&pool, alice.id, "hello", Utc::now())
        .await
        .unwrap();

    let server = feed_server(test_state(pool));
    let path = format!("/posts/{}/like", post.id);

    let first = server
        .post(&path)
        .add_header(AUTHORIZATION, bearer(&token_for(&alice)))
        .await;
    assert_eq!(first.json::<serde_json::Value>()["likeCount"], 1);

    let second = server
        .post(&path)
        .add_header(AUTHORIZATION, bearer(&token_for(&bob)))
        .await;
    assert_eq!(second.json::<serde_json::Value>()["likeCount"], 2);
}

#[tokio::test]
async fn like_unknown_post_is_not_found() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "alice", "pass123").await;
    let token = token_for(&user);
    let server = feed_server(test_state(pool));

    let response = server
        .post(&format!("/posts/{}/like", uuid::Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn like_malformed_post_id_is_rejected() {
    let pool = test_pool().await;
    let user = create_test_user(&pool, "alice", "pass123").await;
    let token = token_for(&user);
    let server = feed_server(test_state(pool));

    let response = server
        .post("/posts/not-a-uuid/like")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid post id");
}

/// The full client journey: log in, read the profile, post, see the
/// post at the top of the feed, like it twice.
#[tokio::test]
async fn end_to_end_scenario() {
    let pool = test_pool().await;
    create_test_user(&pool, "alice", "pass123").await;

    let auth = auth_server(test_state(pool.clone()));
    let feed = feed_server(test_state(pool));

    // Login.
    let login = auth
        .post("/login")
        .json(&json!({ "username": "alice", "password": "pass123" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let token = login.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    // Profile with the token issued by the auth service.
    let profile = auth
        .get("/profile")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(profile.status_code(), StatusCode::OK);
    assert_eq!(profile.json::<serde_json::Value>()["username"], "alice");

    // Publish through the post service with the same token.
    let created = feed
        .post("/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "message": "hi" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let post_id = created.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    // The new post is the first (newest) feed entry, unliked.
    let listed = feed
        .get("/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    let body: serde_json::Value = listed.json();
    assert_eq!(body["posts"][0]["id"], post_id.as_str());
    assert_eq!(body["posts"][0]["message"], "hi");
    assert_eq!(body["posts"][0]["likeCount"], 0);

    // Liking twice yields the same steady-state count.
    let path = format!("/posts/{post_id}/like");
    let once = feed
        .post(&path)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(once.json::<serde_json::Value>()["likeCount"], 1);

    let twice = feed
        .post(&path)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(twice.json::<serde_json::Value>()["likeCount"], 1);
}
