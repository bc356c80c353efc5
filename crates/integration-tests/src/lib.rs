//! Integration tests for the Bookmarks API.
//!
//! # Running Tests
//!
//! The tests talk to a running server and seed users straight into its
//! database, so both must share `DATABASE_URL` and `JWT_SECRET`:
//!
//! ```bash
//! cargo run -p bookmarks-cli -- migrate
//! cargo run -p bookmarks-api &
//! cargo test -p bookmarks-integration-tests -- --ignored
//! ```
//!
//! `API_BASE_URL` overrides the default `http://localhost:3333`.

use bookmarks_api::config::ApiConfig;
use bookmarks_api::models::User;
use bookmarks_api::services::{AuthService, TokenService};
use reqwest::Client;
use sqlx::PgPool;
use uuid::Uuid;

/// Password given to every seeded user.
pub const TEST_PASSWORD: &str = "integration-password";

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3333".to_string())
}

/// A unique address so concurrent test runs never collide.
#[must_use]
pub fn unique_email() -> String {
    format!("it-{}@example.com", Uuid::new_v4().simple())
}

/// HTTP client plus direct database access for seeding.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: PgPool,
    tokens: TokenService,
}

/// A seeded user and a bearer token for them.
pub struct TestUser {
    pub user: User,
    pub token: String,
}

impl TestContext {
    /// Connect using the same environment the server reads.
    ///
    /// # Panics
    ///
    /// If the configuration is invalid or the database is unreachable.
    pub async fn new() -> Self {
        let config = ApiConfig::from_env().expect("Failed to load configuration");
        let pool = bookmarks_api::db::create_pool(&config.database_url)
            .await
            .expect("Failed to connect to database");

        Self {
            client: Client::new(),
            base_url: base_url(),
            pool,
            tokens: TokenService::new(&config.jwt),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a fresh user and sign a token for them.
    ///
    /// # Panics
    ///
    /// If registration or signing fails.
    pub async fn seed_user(&self) -> TestUser {
        let user = AuthService::new(&self.pool)
            .register(&unique_email(), TEST_PASSWORD, Some("Test".to_owned()), None)
            .await
            .expect("Failed to seed user");
        let token = self
            .tokens
            .issue(user.id, user.email.as_str())
            .expect("Failed to sign token")
            .access_token;

        TestUser { user, token }
    }
}
