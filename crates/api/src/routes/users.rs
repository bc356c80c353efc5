//! User profile routes. All guarded.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use serde_json::Value;

use bookmarks_core::Email;

use crate::db::{RepositoryError, UserChanges, UserRepository};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::extract::{Validate, ValidatedBody, trimmed};
use crate::middleware::GetUser;
use crate::middleware::get_user::select;
use crate::models::User;
use crate::state::AppState;

const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Deserialize)]
pub struct MeQuery {
    /// Return only this field of the user.
    pub field: Option<String>,
}

/// `PATCH /users` body. Absent fields are left as they are.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Validate for EditUserRequest {
    fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
        ] {
            if value
                .as_deref()
                .is_some_and(|v| v.trim().chars().count() > MAX_NAME_LENGTH)
            {
                return Err(format!("{name} must be at most {MAX_NAME_LENGTH} characters"));
            }
        }
        Ok(())
    }
}

impl EditUserRequest {
    fn into_changes(self) -> UserChanges {
        UserChanges {
            email: self.email,
            first_name: trimmed(self.first_name.as_deref()),
            last_name: trimmed(self.last_name.as_deref()),
        }
    }
}

/// `GET /users/me[?field=<name>]`
///
/// The whole user, or just one field when `field` is given.
pub async fn me(
    GetUser(user): GetUser,
    query: std::result::Result<Query<MeQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let field = query.field.as_deref();
    select(&user, field)
        .map(Json)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown field: {}", field.unwrap_or(""))))
}

/// `PATCH /users`
pub async fn update(
    State(state): State<AppState>,
    GetUser(user): GetUser,
    ValidatedBody(body): ValidatedBody<EditUserRequest>,
) -> Result<Json<User>> {
    let changes = body.into_changes();
    if changes.is_empty() {
        return Ok(Json(user));
    }

    let record = UserRepository::new(state.pool())
        .update(user.id, &changes)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                AppError::Conflict("An account with this email already exists".to_owned())
            }
            other => AppError::Database(other),
        })?;

    add_breadcrumb("user", "Updated profile", None);
    tracing::info!(user_id = %record.id, "User profile updated");

    Ok(Json(record.into()))
}
