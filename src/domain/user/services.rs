// src/domain/user/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::{UserId, UserSlug, Username};

/// Base used when a name normalizes to nothing (e.g. `"!!!"`).
pub const PLACEHOLDER_SLUG: &str = "user";

pub const DEFAULT_MAX_PROBES: u32 = 10_000;

/// Candidate slugs in probe order: `base`, `base-1`, `base-2`, ...
///
/// Yields the bare base followed by at most `max_probes` suffixed variants.
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    next: u64,
    max_probes: u64,
    started: bool,
}

impl SlugCandidates {
    pub fn new(base: impl Into<String>, max_probes: u32) -> Self {
        Self {
            base: base.into(),
            next: 1,
            max_probes: u64::from(max_probes),
            started: false,
        }
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.base.clone());
        }
        if self.next > self.max_probes {
            return None;
        }
        let candidate = format!("{}-{}", self.base, self.next);
        self.next += 1;
        Some(candidate)
    }
}

/// Domain service responsible for producing unique slugs for users.
pub struct UserSlugService {
    repo: Arc<dyn UserRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_probes: u32,
}

impl UserSlugService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        generator: Arc<dyn SlugGenerator>,
        max_probes: u32,
    ) -> Self {
        Self {
            repo,
            generator,
            max_probes,
        }
    }

    /// Canonical normalization of `source`, never empty.
    pub fn base_slug(&self, source: &str) -> String {
        let base = self.generator.slugify(source);
        if base.is_empty() {
            PLACEHOLDER_SLUG.to_string()
        } else {
            base
        }
    }

    /// Probe the repository until a free slug is found. A slug held by
    /// `ignore_id` counts as free so an update can keep its own slug.
    ///
    /// The result is only a best guess: a concurrent insert may claim the
    /// same slug first, in which case the storage constraint rejects ours.
    pub async fn generate_unique_slug(
        &self,
        username: &Username,
        ignore_id: Option<UserId>,
    ) -> DomainResult<UserSlug> {
        let base = self.base_slug(username.as_str());

        for candidate in SlugCandidates::new(base.as_str(), self.max_probes) {
            let slug = UserSlug::new(candidate)?;
            if !self.is_taken(&slug, ignore_id).await? {
                return Ok(slug);
            }
        }

        tracing::warn!(base = %base, max_probes = self.max_probes, "slug probing exhausted");
        Err(DomainError::Conflict(format!(
            "no free slug for '{base}' after {} attempts",
            self.max_probes
        )))
    }

    async fn is_taken(&self, slug: &UserSlug, ignore_id: Option<UserId>) -> DomainResult<bool> {
        match ignore_id {
            None => self.repo.exists_by_slug(slug).await,
            Some(id) => Ok(self
                .repo
                .find_by_slug(slug)
                .await?
                .is_some_and(|existing| existing.id != id)),
        }
    }
}
