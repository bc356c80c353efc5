//! Value types for the bookmarks domain.

pub mod email;
pub mod id;
pub mod link;

pub use email::{Email, EmailError};
pub use id::{BookmarkId, UserId};
pub use link::{BookmarkLink, LinkError};
