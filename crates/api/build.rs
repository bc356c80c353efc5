//! Build script for the api crate.
//!
//! `sqlx::migrate!` embeds `migrations/` at compile time. Cargo does not see
//! that directory as an input on its own, so a new migration file would not
//! trigger a rebuild without this hint.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
