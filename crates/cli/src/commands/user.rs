//! Account provisioning.
//!
//! ```bash
//! bookmarks-cli user create -e ann@example.com -p 'correct horse' --first-name Ann
//! ```
//!
//! The HTTP signup endpoint only acknowledges requests, so this is how
//! accounts come into existence.

use bookmarks_api::services::AuthService;
use bookmarks_core::UserId;
use secrecy::{ExposeSecret, SecretString};

use super::{CliError, connect};

/// Create a user with a hashed password.
///
/// # Errors
///
/// Returns `CliError::Auth` for an invalid email, a short password or a
/// duplicate account, and `CliError::Database` if the database is unreachable.
pub async fn create(
    email: &str,
    password: &SecretString,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<UserId, CliError> {
    let pool = connect().await?;

    tracing::info!("Creating user: {}", email);
    let user = AuthService::new(&pool)
        .register(email, password.expose_secret(), first_name, last_name)
        .await?;

    tracing::info!(
        "User created successfully! ID: {}, Email: {}",
        user.id,
        user.email
    );

    Ok(user.id)
}
