//! Bookmarks Core - Shared domain types.
//!
//! Used by every crate in the workspace:
//! - `api` - The HTTP service (auth, users, bookmarks)
//! - `cli` - Migrations, account provisioning and token issuance
//! - `integration-tests` - End-to-end tests against a running server
//!
//! The core crate holds validated value types only. No I/O, no database
//! access, no HTTP. Database encodings are gated behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, email addresses and bookmark links

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
