//! Access to the authenticated user.
//!
//! [`jwt_auth`](super::jwt_auth) leaves a [`User`] in the request extensions
//! when the token's subject exists. The extractors here read it back and act
//! as the route guard: no user, no handler.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::Value;

use bookmarks_core::UserId;

use crate::error::AppError;
use crate::models::User;

/// Read the whole user, or one of its (camelCase) fields.
///
/// Returns `None` only when `field` names something the user doesn't have.
#[must_use]
pub fn select(user: &User, field: Option<&str>) -> Option<Value> {
    let value = serde_json::to_value(user).ok()?;
    match field {
        None => Some(value),
        Some(name) => match value {
            Value::Object(mut map) => map.remove(name),
            _ => None,
        },
    }
}

fn attached_user(parts: &Parts) -> Result<&User, AppError> {
    parts
        .extensions
        .get::<User>()
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_owned()))
}

/// Extractor that requires an authenticated user.
///
/// ```rust,ignore
/// async fn me(GetUser(user): GetUser) -> Json<User> {
///     Json(user)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GetUser(pub User);

impl<S> FromRequestParts<S> for GetUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        attached_user(parts).cloned().map(Self)
    }
}

/// Extractor for just the authenticated user's ID.
#[derive(Debug, Clone, Copy)]
pub struct GetUserId(pub UserId);

impl<S> FromRequestParts<S> for GetUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        attached_user(parts).map(|user| Self(user.id))
    }
}
