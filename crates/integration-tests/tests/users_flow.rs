//! User profile endpoints.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (`bookmarks-cli migrate`)
//! - The API server running with the same `DATABASE_URL` and `JWT_SECRET`

#![allow(clippy::unwrap_used)]

use bookmarks_integration_tests::{TestContext, unique_email};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_me_returns_user_without_hash() {
    let ctx = TestContext::new().await;
    let seeded = ctx.seed_user().await;

    let resp = ctx
        .client
        .get(ctx.url("/users/me"))
        .bearer_auth(&seeded.token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], seeded.user.id.get());
    assert_eq!(body["email"], seeded.user.email.as_str());
    assert_eq!(body["firstName"], "Test");
    assert!(body.get("hash").is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_me_single_field() {
    let ctx = TestContext::new().await;
    let seeded = ctx.seed_user().await;

    let resp = ctx
        .client
        .get(ctx.url("/users/me?field=email"))
        .bearer_auth(&seeded.token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!(seeded.user.email.as_str()));

    let resp = ctx
        .client
        .get(ctx.url("/users/me?field=hash"))
        .bearer_auth(&seeded.token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_edit_profile() {
    let ctx = TestContext::new().await;
    let seeded = ctx.seed_user().await;
    let new_email = unique_email();

    let resp = ctx
        .client
        .patch(ctx.url("/users"))
        .bearer_auth(&seeded.token)
        .json(&json!({"email": new_email, "lastName": "Tester"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["email"], new_email.as_str());
    assert_eq!(body["firstName"], "Test");
    assert_eq!(body["lastName"], "Tester");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_edit_profile_rejects_bad_and_taken_email() {
    let ctx = TestContext::new().await;
    let alice = ctx.seed_user().await;
    let bob = ctx.seed_user().await;

    let resp = ctx
        .client
        .patch(ctx.url("/users"))
        .bearer_auth(&alice.token)
        .json(&json!({"email": "not-an-email"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = ctx
        .client
        .patch(ctx.url("/users"))
        .bearer_auth(&alice.token)
        .json(&json!({"email": bob.user.email.as_str()}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
