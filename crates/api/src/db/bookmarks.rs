//! Bookmark repository.

use sqlx::PgPool;

use bookmarks_core::{BookmarkId, BookmarkLink, UserId};

use super::RepositoryError;
use crate::models::Bookmark;

/// Input for [`BookmarkRepository::create`].
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: BookmarkLink,
}

/// Partial bookmark update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct BookmarkChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<BookmarkLink>,
}

pub struct BookmarkRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BookmarkRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All bookmarks owned by `owner`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, owner: UserId) -> Result<Vec<Bookmark>, RepositoryError> {
        let rows = sqlx::query_as::<_, Bookmark>(
            r"
            SELECT id, title, description, link, user_id, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a bookmark regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, RepositoryError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r"
            SELECT id, title, description, link, user_id, created_at, updated_at
            FROM bookmarks
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Get a bookmark only if `owner` owns it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_for_user(
        &self,
        id: BookmarkId,
        owner: UserId,
    ) -> Result<Option<Bookmark>, RepositoryError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r"
            SELECT id, title, description, link, user_id, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a bookmark owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// dangling `owner`).
    pub async fn create(
        &self,
        owner: UserId,
        bookmark: &NewBookmark,
    ) -> Result<Bookmark, RepositoryError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r"
            INSERT INTO bookmarks (title, description, link, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, link, user_id, created_at, updated_at
            ",
        )
        .bind(&bookmark.title)
        .bind(bookmark.description.as_deref())
        .bind(&bookmark.link)
        .bind(owner)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Apply a partial update and bump `updated_at`.
    ///
    /// Ownership is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the bookmark doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: BookmarkId,
        changes: &BookmarkChanges,
    ) -> Result<Bookmark, RepositoryError> {
        sqlx::query_as::<_, Bookmark>(
            r"
            UPDATE bookmarks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                link = COALESCE($4, link),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, link, user_id, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.link.as_ref())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete a bookmark.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the bookmark doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: BookmarkId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
