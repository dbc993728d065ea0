//! Path-aware sanitization, one segment at a time.

use std::path::MAIN_SEPARATOR;

/// Splits `path` on the platform separator, runs [`clean`](super::clean)
/// on every segment independently, and rejoins with the same separator.
///
/// Sanitization never crosses a directory boundary: segments cannot merge,
/// and empty segments come back as the default name. A separator from a
/// *different* platform inside a segment gets no special treatment here;
/// it is removed by the character filter like any other denylisted
/// character. The path is not checked for existence or permissions.
pub fn clean_path(path: &str) -> String {
    let separator = MAIN_SEPARATOR.to_string();
    path.split(MAIN_SEPARATOR)
        .map(super::clean)
        .collect::<Vec<_>>()
        .join(&separator)
}
