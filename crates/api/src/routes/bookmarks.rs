//! Bookmark CRUD. All guarded; every bookmark is scoped to its owner.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use bookmarks_core::{BookmarkId, BookmarkLink, UserId};

use crate::db::{BookmarkChanges, BookmarkRepository, NewBookmark};
use crate::error::{ACCESS_DENIED, AppError, Result, add_breadcrumb};
use crate::extract::{Validate, ValidatedBody, trimmed};
use crate::middleware::GetUserId;
use crate::models::Bookmark;
use crate::state::AppState;

pub const MAX_TITLE_LENGTH: usize = 255;

/// `POST /bookmarks` body.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: BookmarkLink,
}

/// `PATCH /bookmarks/{id}` body. Absent fields are left as they are.
#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<BookmarkLink>,
}

fn validate_title(title: &str) -> std::result::Result<(), String> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err("title cannot be empty".to_owned());
    }
    if len > MAX_TITLE_LENGTH {
        return Err(format!("title must be at most {MAX_TITLE_LENGTH} characters"));
    }
    Ok(())
}

impl Validate for CreateBookmarkRequest {
    fn validate(&self) -> std::result::Result<(), String> {
        validate_title(&self.title)
    }
}

impl Validate for EditBookmarkRequest {
    fn validate(&self) -> std::result::Result<(), String> {
        self.title.as_deref().map_or(Ok(()), validate_title)
    }
}

fn parse_id(raw: &str) -> Result<BookmarkId> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid bookmark id: {raw}")))
}

/// Load a bookmark for modification by `owner`.
///
/// `404` if it doesn't exist, `403` if someone else owns it.
async fn owned_bookmark(
    repo: &BookmarkRepository<'_>,
    id: BookmarkId,
    owner: UserId,
) -> Result<Bookmark> {
    let bookmark = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bookmark {id} not found")))?;

    if bookmark.user_id != owner {
        tracing::warn!(bookmark_id = %id, user_id = %owner, "Bookmark access denied");
        return Err(AppError::Forbidden(ACCESS_DENIED.to_owned()));
    }

    Ok(bookmark)
}

/// `GET /bookmarks`
pub async fn list(
    State(state): State<AppState>,
    GetUserId(user_id): GetUserId,
) -> Result<Json<Vec<Bookmark>>> {
    let bookmarks = BookmarkRepository::new(state.pool())
        .list_for_user(user_id)
        .await?;
    Ok(Json(bookmarks))
}

/// `GET /bookmarks/{id}`
pub async fn show(
    State(state): State<AppState>,
    GetUserId(user_id): GetUserId,
    Path(raw_id): Path<String>,
) -> Result<Json<Bookmark>> {
    let id = parse_id(&raw_id)?;
    BookmarkRepository::new(state.pool())
        .get_for_user(id, user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Bookmark {id} not found")))
}

/// `POST /bookmarks`
pub async fn create(
    State(state): State<AppState>,
    GetUserId(user_id): GetUserId,
    ValidatedBody(body): ValidatedBody<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>)> {
    let new = NewBookmark {
        title: body.title.trim().to_owned(),
        description: trimmed(body.description.as_deref()),
        link: body.link,
    };

    let bookmark = BookmarkRepository::new(state.pool())
        .create(user_id, &new)
        .await?;

    let bookmark_id = bookmark.id.to_string();
    add_breadcrumb(
        "bookmark",
        "Created bookmark",
        Some(&[("bookmark_id", bookmark_id.as_str())]),
    );
    tracing::info!(bookmark_id = %bookmark.id, user_id = %user_id, "Bookmark created");

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// `PATCH /bookmarks/{id}`
pub async fn update(
    State(state): State<AppState>,
    GetUserId(user_id): GetUserId,
    Path(raw_id): Path<String>,
    ValidatedBody(body): ValidatedBody<EditBookmarkRequest>,
) -> Result<Json<Bookmark>> {
    let id = parse_id(&raw_id)?;
    let repo = BookmarkRepository::new(state.pool());
    let existing = owned_bookmark(&repo, id, user_id).await?;

    let changes = BookmarkChanges {
        title: body.title.as_deref().map(|t| t.trim().to_owned()),
        description: trimmed(body.description.as_deref()),
        link: body.link,
    };
    if changes.title.is_none() && changes.description.is_none() && changes.link.is_none() {
        return Ok(Json(existing));
    }

    let bookmark = repo.update(id, &changes).await?;
    tracing::info!(bookmark_id = %id, user_id = %user_id, "Bookmark updated");

    Ok(Json(bookmark))
}

/// `DELETE /bookmarks/{id}`
pub async fn delete(
    State(state): State<AppState>,
    GetUserId(user_id): GetUserId,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;
    let repo = BookmarkRepository::new(state.pool());
    owned_bookmark(&repo, id, user_id).await?;

    repo.delete(id).await?;
    tracing::info!(bookmark_id = %id, user_id = %user_id, "Bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"é".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn create_request_validates_link_on_deserialize() {
        let ok: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title":"Rust","link":"https://www.rust-lang.org"}"#)
                .unwrap();
        assert_eq!(ok.link.as_str(), "https://www.rust-lang.org/");
        assert!(ok.description.is_none());

        assert!(
            serde_json::from_str::<CreateBookmarkRequest>(r#"{"title":"x","link":"not a url"}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<CreateBookmarkRequest>(r#"{"title":"x"}"#).is_err());
    }

    #[test]
    fn edit_request_checks_title_only_when_present() {
        let body: EditBookmarkRequest = serde_json::from_str("{}").unwrap();
        assert!(body.validate().is_ok());

        let body: EditBookmarkRequest = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn non_numeric_id_is_bad_request() {
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert_eq!(parse_id("12").unwrap(), BookmarkId::new(12));
    }
}
