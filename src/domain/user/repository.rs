// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{UserId, UserSlug, Username},
};
use async_trait::async_trait;

/// Persistent user storage.
///
/// Implementations must enforce uniqueness of `slug` and `username` at the
/// storage level and report violations as `DomainError::Conflict`; callers
/// treat that signal as authoritative regardless of any earlier existence
/// check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_slug(&self, slug: &UserSlug) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool>;

    async fn exists_by_slug(&self, slug: &UserSlug) -> DomainResult<bool>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Fails with `NotFound` when no row has the given id.
    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    /// Fails with `NotFound` when no row has the given id.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
