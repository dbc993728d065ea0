//! Trailing dot/space stripping and whitespace trimming.

/// Removes the maximal trailing run of dots and whitespace, in any mixture.
///
/// Windows silently drops trailing dots and spaces, so they are stripped
/// up front to keep reserved-name matching and round-trips predictable.
/// Leading and interior dots/spaces are untouched.
pub fn strip_trailing(name: &str) -> &str {
    name.trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}

/// Trims surrounding whitespace. Interior whitespace is preserved exactly.
pub fn strip_surrounding_spaces(name: &str) -> &str {
    name.trim()
}
