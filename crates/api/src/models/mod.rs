//! Domain models for the bookmarks API.
//!
//! Row types (`FromRow`) double as response bodies except for
//! [`UserRecord`], which carries the password hash and is never serialised.

pub mod bookmark;
pub mod claims;
pub mod user;

pub use bookmark::Bookmark;
pub use claims::{AccessToken, Claims};
pub use user::{User, UserRecord};
