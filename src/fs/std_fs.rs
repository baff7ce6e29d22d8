//! Real filesystem backed by std::fs
//!
//! Directory handles synthesize "." and ".." records up front so a one-level
//! listing shows them, then stream the remaining entries lazily.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{DirEntry, FileKind, FileStatus, Filesystem, truncate_to_slot};

/// Filesystem implementation over the host OS.
pub struct StdFilesystem;

pub struct StdHandle {
    path: PathBuf,
    dir: Option<DirState>,
}

struct DirState {
    pending: VecDeque<DirEntry>,
    inner: fs::ReadDir,
}

impl Filesystem for StdFilesystem {
    type Handle = StdHandle;

    fn open(&self, path: &str) -> io::Result<StdHandle> {
        let md = fs::metadata(path)?;
        let dir = if md.is_dir() {
            Some(DirState {
                pending: dot_entries(Path::new(path), &md),
                inner: fs::read_dir(path)?,
            })
        } else {
            None
        };
        Ok(StdHandle {
            path: PathBuf::from(path),
            dir,
        })
    }

    fn fstat(&self, handle: &StdHandle) -> io::Result<FileStatus> {
        fs::metadata(&handle.path).map(|md| status_of(&md))
    }

    fn stat(&self, path: &str) -> io::Result<FileStatus> {
        fs::metadata(path).map(|md| status_of(&md))
    }

    fn read_entry(&self, handle: &mut StdHandle) -> Option<DirEntry> {
        let dir = handle.dir.as_mut()?;
        if let Some(entry) = dir.pending.pop_front() {
            return Some(entry);
        }
        // A read error ends the scan the same way end-of-stream does.
        let entry = dir.inner.next()?.ok()?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        Some(DirEntry {
            inode: entry_inode(&entry),
            name: truncate_to_slot(&name).to_string(),
        })
    }
}

/// The "." and ".." records every directory scan begins with.
fn dot_entries(path: &Path, md: &fs::Metadata) -> VecDeque<DirEntry> {
    let own = inode_of(md);
    let parent = fs::metadata(path.join(".."))
        .map(|m| inode_of(&m))
        .unwrap_or(own);
    VecDeque::from([DirEntry::new(own, "."), DirEntry::new(parent, "..")])
}

fn status_of(md: &fs::Metadata) -> FileStatus {
    FileStatus {
        kind: kind_of(md),
        inode: inode_of(md),
        size: md.len(),
    }
}

#[cfg(unix)]
fn kind_of(md: &fs::Metadata) -> FileKind {
    use std::os::unix::fs::FileTypeExt;
    let ft = md.file_type();
    if ft.is_dir() {
        FileKind::Dir
    } else if ft.is_char_device() || ft.is_block_device() {
        FileKind::Device
    } else {
        FileKind::File
    }
}

#[cfg(not(unix))]
fn kind_of(md: &fs::Metadata) -> FileKind {
    if md.is_dir() { FileKind::Dir } else { FileKind::File }
}

#[cfg(unix)]
fn inode_of(md: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    md.ino()
}

#[cfg(not(unix))]
fn inode_of(_md: &fs::Metadata) -> u64 {
    1
}

#[cfg(unix)]
fn entry_inode(entry: &fs::DirEntry) -> u64 {
    use std::os::unix::fs::DirEntryExt;
    entry.ino()
}

#[cfg(not(unix))]
fn entry_inode(entry: &fs::DirEntry) -> u64 {
    entry.metadata().map(|m| inode_of(&m)).unwrap_or(1)
}
