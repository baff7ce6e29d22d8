//! Minimal filesystem interface the traversal engine runs against
//!
//! The engine only needs four operations: open a path, stat an open handle,
//! stat an arbitrary path, and pull directory entries one record at a time.
//! Handles close on drop, so release is guaranteed on every exit path.
//!
//! - `StdFilesystem`: the real thing, backed by `std::fs`
//! - `MemFs` (test-utils): an in-memory tree with scriptable failures

mod std_fs;

#[cfg(any(test, feature = "test-utils"))]
pub mod mem;

use std::io;

pub use std_fs::{StdFilesystem, StdHandle};

/// Width of a directory entry's name slot, in bytes. Entry names longer than
/// this are truncated when the entry record is produced.
pub const NAME_SLOT: usize = 14;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Dir,
    File,
    Device,
}

impl FileKind {
    /// Integer code used in listing output: directories 1, files 2, devices 3.
    pub fn code(self) -> u8 {
        match self {
            FileKind::Dir => 1,
            FileKind::File => 2,
            FileKind::Device => 3,
        }
    }

    /// Lowercase label used in JSON output.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Dir => "dir",
            FileKind::File => "file",
            FileKind::Device => "device",
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, FileKind::Dir)
    }
}

/// Status of one path, re-fetched on every traversal step (never cached).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub kind: FileKind,
    pub inode: u64,
    pub size: u64,
}

/// One record yielded while enumerating a directory.
///
/// An inode of 0 marks a tombstoned slot; the walker skips those. The name is
/// at most [`NAME_SLOT`] bytes, enforced by the constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub inode: u64,
    pub name: String,
}

impl DirEntry {
    pub fn new(inode: u64, name: &str) -> Self {
        Self {
            inode,
            name: truncate_to_slot(name).to_string(),
        }
    }
}

/// Truncate a name to the entry slot width, respecting char boundaries.
pub fn truncate_to_slot(name: &str) -> &str {
    if name.len() <= NAME_SLOT {
        return name;
    }
    let mut end = NAME_SLOT;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// The four operations the walker needs from a filesystem.
///
/// `read_entry` returns `None` at end of stream; a failed read also ends the
/// stream rather than surfacing an error, matching how a short read terminates
/// a raw directory scan.
pub trait Filesystem {
    type Handle;

    fn open(&self, path: &str) -> io::Result<Self::Handle>;

    fn fstat(&self, handle: &Self::Handle) -> io::Result<FileStatus>;

    fn stat(&self, path: &str) -> io::Result<FileStatus>;

    fn read_entry(&self, handle: &mut Self::Handle) -> Option<DirEntry>;
}
