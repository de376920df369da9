// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use services::{SlugCandidates, UserSlugService};
pub use value_objects::{Age, PersonName, UserId, UserSlug, Username};

/// Message returned whenever a user id or slug does not resolve.
pub const USER_NOT_FOUND: &str = "User was not found";
