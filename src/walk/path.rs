//! Bounded child-path construction
//!
//! One `PathBuilder` serves a whole directory scan: it holds `base + "/"` and
//! rebuilds the child suffix for every entry, so no sibling's name leaks into
//! the next. The capacity check happens once, up front, and overflow is a
//! typed error the caller turns into a "path too long" diagnostic.

use thiserror::Error;

use crate::fs::NAME_SLOT;

/// The base path cannot take another full name slot within the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("path too long")]
pub struct PathOverflow;

/// Builds `base/child` paths inside a bounded buffer.
pub struct PathBuilder {
    buf: String,
    base_len: usize,
}

impl PathBuilder {
    /// Start building children of `base`. Fails if `base`, a separator, a
    /// maximal name slot, and a terminator would not fit in `capacity` bytes.
    pub fn with_base(base: &str, capacity: usize) -> Result<Self, PathOverflow> {
        if base.len() + 1 + NAME_SLOT + 1 > capacity {
            return Err(PathOverflow);
        }
        let mut buf = String::with_capacity(base.len() + 1 + NAME_SLOT);
        buf.push_str(base);
        buf.push('/');
        Ok(Self {
            base_len: buf.len(),
            buf,
        })
    }

    /// Produce the path for one child, replacing any previous child's suffix.
    /// The raw (unpadded) name is appended so open/stat see the true name.
    pub fn child(&mut self, name: &str) -> &str {
        self.buf.truncate(self.base_len);
        self.buf.push_str(name);
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_appends_segment() {
        let mut builder = PathBuilder::with_base("root/sub", 512).unwrap();
        assert_eq!(builder.child("b.txt"), "root/sub/b.txt");
    }

    #[test]
    fn test_sibling_suffix_does_not_leak() {
        let mut builder = PathBuilder::with_base("root", 512).unwrap();
        assert_eq!(builder.child("longer_name.rs"), "root/longer_name.rs");
        assert_eq!(builder.child("a"), "root/a");
    }

    #[test]
    fn test_overflow_is_typed() {
        // base(8) + '/' + slot(14) + terminator = 24 > 20
        let err = PathBuilder::with_base("12345678", 20).map(|_| ()).unwrap_err();
        assert_eq!(err, PathOverflow);
    }

    #[test]
    fn test_bound_is_exact() {
        // base(4) + 1 + 14 + 1 = 20: fits a 20-byte buffer, not a 19-byte one
        assert!(PathBuilder::with_base("base", 20).is_ok());
        assert!(PathBuilder::with_base("base", 19).is_err());
    }
}
