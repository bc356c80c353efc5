//! Bookmarks API library.
//!
//! The HTTP service as a library, so the binary, the CLI and the tests share
//! one router, one schema and one set of repositories.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use app::build_router;
pub use config::ApiConfig;
pub use state::AppState;
