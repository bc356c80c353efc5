//! Business logic services.
//!
//! - `auth` - Signup/signin acknowledgements, account registration, password hashing
//! - `token` - Access token signing and verification
//! - `strategy` - Resolve a verified token to the user it names

pub mod auth;
pub mod strategy;
pub mod token;

pub use auth::{Acknowledgement, AuthError, AuthService};
pub use strategy::JwtStrategy;
pub use token::{TokenError, TokenService};
