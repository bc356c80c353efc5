//! Database migration command.
//!
//! ```bash
//! bookmarks-cli migrate
//! ```
//!
//! Applies the migrations in `crates/api/migrations/` to `DATABASE_URL`.
//! Already-applied migrations are skipped.

use bookmarks_api::db::MIGRATOR;

use super::{CliError, connect};

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
