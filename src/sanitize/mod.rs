//! The sanitization pipeline.
//!
//! [`clean`] runs the stages in a fixed order: invalid-character removal,
//! trailing dot/space stripping, surrounding-space trimming, reserved-name
//! defusal (exact, then extension-aware), and finally the blank fallback.
//! The order matters: trailing stripping must precede reserved matching so
//! that `"CON."` is caught.
//!
//! Length capping is intentionally not part of [`clean`]; callers that
//! need it apply [`truncate_filename`] themselves.

mod filter;
mod path;
mod reserved;
mod strip;
mod truncate;

pub use filter::strip_invalid_characters;
pub use path::clean_path;
pub use reserved::{defuse_reserved, defuse_reserved_with_extension};
pub use strip::{strip_surrounding_spaces, strip_trailing};
pub use truncate::truncate_filename;

/// Substituted when sanitization leaves nothing usable.
pub const DEFAULT_NAME: &str = "file";

/// Sanitizes `name` into a filename safe on all supported filesystems.
///
/// The result is never empty, contains no character from the denylist,
/// and never collides (ignoring extension) with a DOS device name or an
/// NTFS metadata name.
pub fn clean(name: &str) -> String {
    let candidate = strip_invalid_characters(name);
    let candidate = strip_trailing(&candidate);
    let candidate = strip_surrounding_spaces(candidate);
    let candidate = defuse_reserved(candidate);
    let candidate = defuse_reserved_with_extension(&candidate);
    not_blank(candidate)
}

/// True iff `name` is already safe, i.e. [`clean`] would return it unchanged.
pub fn is_clean(name: &str) -> bool {
    clean(name) == name
}

fn not_blank(name: String) -> String {
    if name.is_empty() {
        tracing::debug!("sanitized name is empty, substituting default");
        return DEFAULT_NAME.to_string();
    }
    name
}
