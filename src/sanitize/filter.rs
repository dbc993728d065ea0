//! Invalid-character removal.

use once_cell::sync::Lazy;
use regex::Regex;

// Control characters plus the symbols rejected somewhere across Windows,
// macOS, Linux, and FAT-family filesystems. `@` and `!` are in the set
// because some FAT tooling rejects them.
static CHARACTER_FILTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\x00-\x1F\\/:*?"<>|@!]"#).expect("character filter pattern"));

/// Removes every denylisted character from `name`.
///
/// Operates per code point: anything outside the denylist, including
/// non-ASCII letters and emoji, passes through untouched. May return an
/// empty string.
pub fn strip_invalid_characters(name: &str) -> String {
    CHARACTER_FILTER.replace_all(name, "").into_owned()
}
