// tests/support/mocks/mod.rs
pub mod user_repo;
pub mod util;

pub use user_repo::{InMemoryUserRepo, RacingUserRepo};
pub use util::IdentitySlug;
