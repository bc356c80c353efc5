//! Signup and signin.
//!
//! Both endpoints acknowledge the request and nothing more: the body, if
//! any, is never read. Accounts are provisioned with `bookmarks-cli user
//! create` and tokens minted with `bookmarks-cli token issue`.

use axum::{Json, http::StatusCode};

use crate::services::auth::{self, Acknowledgement};

/// `POST /auth/signup`
pub async fn signup() -> (StatusCode, Json<Acknowledgement>) {
    (StatusCode::CREATED, Json(auth::signup()))
}

/// `POST /auth/signin`
pub async fn signin() -> Json<Acknowledgement> {
    Json(auth::signin())
}
