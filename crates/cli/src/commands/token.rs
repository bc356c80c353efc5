//! Access token issuance.
//!
//! ```bash
//! bookmarks-cli token issue -e ann@example.com -p 'correct horse'
//! ```
//!
//! Checks the credentials, then prints a bearer token signed with the
//! server's `JWT_SECRET` to stdout.

use bookmarks_api::config::ApiConfig;
use bookmarks_api::services::{AuthService, TokenService};
use secrecy::{ExposeSecret, SecretString};

use super::CliError;

/// Verify credentials and print a fresh access token.
///
/// # Errors
///
/// Returns `CliError::Auth` for wrong credentials, `CliError::Config` if the
/// server configuration is invalid.
pub async fn issue(email: &str, password: &SecretString) -> Result<(), CliError> {
    let config = ApiConfig::from_env()?;
    if config.jwt.using_fallback {
        tracing::warn!("JWT_SECRET is not set; the token is signed with the fallback secret");
    }

    let pool = bookmarks_api::db::create_pool(&config.database_url).await?;
    let user = AuthService::new(&pool)
        .login(email, password.expose_secret())
        .await?;

    let token = TokenService::new(&config.jwt).issue(user.id, user.email.as_str())?;
    tracing::info!(
        "Issued token for user {} (expires in {}s)",
        user.id,
        config.jwt.expires_in_secs
    );

    #[allow(clippy::print_stdout)]
    {
        println!("{}", token.access_token);
    }

    Ok(())
}
