//! Restrictive cross-platform filename sanitization.
//!
//! Turns arbitrary text into a filename that is safe on Windows, macOS,
//! Linux, and FAT-family filesystems at the same time, by applying the
//! union of all of their restrictions rather than just the host OS's
//! rules: invalid characters are removed, trailing dots and spaces are
//! stripped, and names that collide with DOS device names or NTFS
//! metadata files are defused with a trailing underscore.
//!
//! Every operation is a total function: no input produces an error, and
//! [`clean`] never returns an empty string.

pub mod logging;
pub mod sanitize;

pub use sanitize::{clean, clean_path, is_clean, truncate_filename, DEFAULT_NAME};
