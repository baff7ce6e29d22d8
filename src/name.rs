//! Name formatting and self/parent classification
//!
//! A "formatted name" is the final path segment normalized to the fixed
//! [`NAME_SLOT`] width. Two padding policies exist over the same extraction:
//! space padding for column-aligned display, null padding for structural
//! comparison. Segments already at or past the slot width pass through
//! untouched.

use std::borrow::Cow;

use crate::fs::NAME_SLOT;

/// Fill character policy for short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Pad with spaces, for column alignment in listings.
    Space,
    /// Pad with null bytes, for comparison against search targets.
    Null,
}

impl Padding {
    fn fill(self) -> char {
        match self {
            Padding::Space => ' ',
            Padding::Null => '\0',
        }
    }
}

/// Extract the final segment of `path` and normalize it to the slot width.
///
/// Names of [`NAME_SLOT`] bytes or more are returned borrowed and unmodified;
/// shorter names are copied into an owned field of exactly [`NAME_SLOT`]
/// bytes, padded per the policy. Each call returns its own value; there is no
/// shared buffer between calls.
pub fn format_name(path: &str, padding: Padding) -> Cow<'_, str> {
    let name = match path.rfind('/') {
        Some(slash) => &path[slash + 1..],
        None => path,
    };
    if name.len() >= NAME_SLOT {
        return Cow::Borrowed(name);
    }
    let mut padded = String::with_capacity(NAME_SLOT);
    padded.push_str(name);
    for _ in name.len()..NAME_SLOT {
        padded.push(padding.fill());
    }
    Cow::Owned(padded)
}

/// True exactly for the "." and ".." pseudo-entries, null padding ignored.
///
/// Names that merely start with a dot (".git") are not pseudo-entries.
pub fn is_self_or_parent(name: &str) -> bool {
    let name = name.trim_end_matches('\0');
    name == "." || name == ".."
}
