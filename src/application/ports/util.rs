// src/application/ports/util.rs

/// Turns free text into its canonical URL-safe form.
///
/// Output is lowercase ASCII with single `-` separators and may be empty
/// when the input has no alphanumeric content.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
