//! User repository for database operations.
//!
//! Queries are checked at runtime (`query_as` + `FromRow`) so the crate builds
//! without a database.

use std::future::Future;

use sqlx::PgPool;

use bookmarks_core::{Email, UserId};

use super::RepositoryError;
use crate::models::UserRecord;

/// Primary-key lookup used by token validation.
///
/// Implemented by [`UserRepository`]; tests substitute an in-memory map.
pub trait UserLookup {
    /// Load the user row with the given key, if any.
    fn find_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<UserRecord>, RepositoryError>> + Send;
}

/// Input for [`UserRepository::create`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    /// Already-hashed password.
    pub hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial profile update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRecord>(
            r"
            SELECT id, email, hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRecord>(
            r"
            SELECT id, email, hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, user: &NewUser) -> Result<UserRecord, RepositoryError> {
        sqlx::query_as::<_, UserRecord>(
            r"
            INSERT INTO users (email, hash, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, hash, first_name, last_name, created_at, updated_at
            ",
        )
        .bind(&user.email)
        .bind(&user.hash)
        .bind(user.first_name.as_deref())
        .bind(user.last_name.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique_violation(e, "email already exists"))
    }

    /// Apply a partial profile update and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Conflict` if the new email belongs to another user.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<UserRecord, RepositoryError> {
        sqlx::query_as::<_, UserRecord>(
            r"
            UPDATE users
            SET email = COALESCE($2, email),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                updated_at = now()
            WHERE id = $1
            RETURNING id, email, hash, first_name, last_name, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(changes.email.as_ref())
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique_violation(e, "email already exists"))?
        .ok_or(RepositoryError::NotFound)
    }
}

impl UserLookup for UserRepository<'_> {
    async fn find_user(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
        self.get_by_id(id).await
    }
}
