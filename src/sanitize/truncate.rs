//! Standalone length capping, kept out of the main pipeline.

/// NAME_MAX on Linux; NTFS and APFS share the same per-component limit.
const MAX_LENGTH: usize = 255;

/// Caps `name` at 255 bytes; shorter names are returned unchanged.
///
/// The cut backs off to the nearest char boundary at or below the limit,
/// so a multi-byte code point is dropped whole rather than split. Not
/// applied by [`clean`](super::clean); callers opt in.
pub fn truncate_filename(name: &str) -> String {
    if name.len() <= MAX_LENGTH {
        return name.to_string();
    }

    let mut take = MAX_LENGTH;
    while take > 0 && !name.is_char_boundary(take) {
        take -= 1;
    }
    name[..take].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_unchanged() {
        assert_eq!(truncate_filename(""), "");
        assert_eq!(truncate_filename("foo"), "foo");
    }

    #[test]
    fn at_limit_unchanged() {
        let name = "a".repeat(MAX_LENGTH);
        assert_eq!(truncate_filename(&name), name);
    }

    #[test]
    fn over_limit_cut_to_exactly_max() {
        let name = "a".repeat(MAX_LENGTH + 1);
        let truncated = truncate_filename(&name);
        assert_eq!(truncated.len(), MAX_LENGTH);
        assert_eq!(truncated, &name[..MAX_LENGTH]);
    }

    #[test]
    fn long_ascii_name_keeps_prefix() {
        let name = "foobarbaz".repeat(40); // 360 bytes
        let truncated = truncate_filename(&name);
        assert_eq!(truncated.len(), MAX_LENGTH);
        assert!(name.starts_with(&truncated));
    }

    #[test]
    fn multibyte_boundary_backed_off() {
        // 253 ASCII bytes followed by a 3-byte code point straddling the limit.
        let name = format!("{}ねこ", "a".repeat(253));
        assert_eq!(name.len(), 259);
        let truncated = truncate_filename(&name);
        assert_eq!(truncated.len(), 253);
        assert_eq!(truncated, "a".repeat(253));
    }
}
