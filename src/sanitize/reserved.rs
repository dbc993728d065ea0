//! Reserved device and metadata name defusal.
//!
//! Windows refuses (or silently redirects) filenames that collide with
//! DOS device names regardless of casing, and NTFS reserves its metadata
//! filenames at the filesystem root. Both tables are matched here.
//!
//! See <https://en.wikipedia.org/wiki/Filename#Reserved_characters_and_words>.

/// DOS device names, refused by Windows in any casing.
const DOS_DEVICE_NAMES: [&str; 28] = [
    "CON", "PRN", "AUX", "NUL", "CLOCK$", "CONFIG$", "SCREEN$", "$IDLE$", "COM0", "COM1", "COM2",
    "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9", "LPT0", "LPT1", "LPT2", "LPT3", "LPT4",
    "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// NTFS metadata filenames.
const NTFS_METADATA_NAMES: [&str; 14] = [
    "$Mft", "$MftMirr", "$LogFile", "$Volume", "$AttrDef", "$Bitmap", "$Boot", "$BadClus",
    "$Secure", "$Upcase", "$Extend", "$Quota", "$ObjId", "$Reparse",
];

/// Defuses an exact, case-insensitive collision with a reserved name.
///
/// On a match the result uses the table's canonical casing with a single
/// trailing underscore (`con` and `Con` both yield `CON_`). Full-string
/// equality only; substrings and prefixes never match.
pub fn defuse_reserved(name: &str) -> String {
    for reserved in DOS_DEVICE_NAMES.iter().chain(NTFS_METADATA_NAMES.iter()) {
        if name.eq_ignore_ascii_case(reserved) {
            tracing::debug!(name, canonical = reserved, "defusing reserved filename");
            return format!("{reserved}_");
        }
    }
    name.to_string()
}

/// Defuses a reserved base name hiding behind an extension.
///
/// `$Mft.txt` is still a dangerous collision, so the base is checked on
/// its own; when it matches, the original extension is reattached
/// verbatim (`$Mft.txt` → `$Mft_.txt`). When the base is unreserved the
/// whole candidate passes through unchanged.
pub fn defuse_reserved_with_extension(name: &str) -> String {
    let ext = extension(name);
    let base = &name[..name.len() - ext.len()];
    let defused = defuse_reserved(base);
    if defused != base {
        return format!("{defused}{ext}");
    }
    name.to_string()
}

/// The final dot and suffix, or `""` when the name has no dot.
///
/// Matches the platform `Ext` convention: `".NUL"` is all extension with
/// an empty base.
fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}
