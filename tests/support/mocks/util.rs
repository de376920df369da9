// tests/support/mocks/util.rs

/// Passes input through untouched so tests control the base slug exactly.
#[derive(Clone)]
pub struct IdentitySlug;

impl user_registry::application::ports::util::SlugGenerator for IdentitySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
