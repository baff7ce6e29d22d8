//! In-memory filesystem for tests and benches
//!
//! Builds a tree of directories, files, and device nodes with fixed-slot
//! entry records, and lets tests script failures: deny open or stat on a
//! specific path, or drop tombstoned (inode 0) slots into a directory.

use std::collections::{HashMap, HashSet};
use std::io;

use super::{DirEntry, FileKind, FileStatus, Filesystem};

/// Scriptable in-memory filesystem.
pub struct MemFs {
    dirs: HashMap<String, Vec<DirEntry>>,
    stats: HashMap<String, FileStatus>,
    deny_open: HashSet<String>,
    deny_stat: HashSet<String>,
    next_inode: u64,
}

pub struct MemHandle {
    path: String,
    entries: Option<std::vec::IntoIter<DirEntry>>,
}

impl MemFs {
    pub fn new() -> Self {
        let mut stats = HashMap::new();
        // Virtual super-root so ".." above a top-level directory still stats.
        stats.insert(
            String::new(),
            FileStatus {
                kind: FileKind::Dir,
                inode: 1,
                size: 0,
            },
        );
        Self {
            dirs: HashMap::new(),
            stats,
            deny_open: HashSet::new(),
            deny_stat: HashSet::new(),
            next_inode: 2,
        }
    }

    /// Register a directory, seeded with its "." and ".." entries.
    pub fn dir(&mut self, path: &str) -> &mut Self {
        let inode = self.alloc();
        self.stats.insert(
            path.to_string(),
            FileStatus {
                kind: FileKind::Dir,
                inode,
                size: 0,
            },
        );
        let parent_inode = self
            .stats
            .get(parent_of(path))
            .map(|s| s.inode)
            .unwrap_or(1);
        self.dirs.insert(
            path.to_string(),
            vec![DirEntry::new(inode, "."), DirEntry::new(parent_inode, "..")],
        );
        self.link(path, inode);
        self
    }

    pub fn file(&mut self, path: &str, size: u64) -> &mut Self {
        self.node(path, FileKind::File, size)
    }

    pub fn device(&mut self, path: &str) -> &mut Self {
        self.node(path, FileKind::Device, 0)
    }

    /// Drop an unused (inode 0) slot into a directory's entry stream.
    pub fn tombstone(&mut self, dir: &str) -> &mut Self {
        if let Some(entries) = self.dirs.get_mut(dir) {
            entries.push(DirEntry::new(0, ""));
        }
        self
    }

    pub fn deny_open(&mut self, path: &str) -> &mut Self {
        self.deny_open.insert(path.to_string());
        self
    }

    pub fn deny_stat(&mut self, path: &str) -> &mut Self {
        self.deny_stat.insert(path.to_string());
        self
    }

    fn node(&mut self, path: &str, kind: FileKind, size: u64) -> &mut Self {
        let inode = self.alloc();
        self.stats
            .insert(path.to_string(), FileStatus { kind, inode, size });
        self.link(path, inode);
        self
    }

    fn link(&mut self, path: &str, inode: u64) {
        if let Some(slash) = path.rfind('/') {
            let (parent, name) = (&path[..slash], &path[slash + 1..]);
            if let Some(entries) = self.dirs.get_mut(parent) {
                entries.push(DirEntry::new(inode, name));
            }
        }
    }

    fn alloc(&mut self) -> u64 {
        let inode = self.next_inode;
        self.next_inode += 1;
        inode
    }

    fn lookup(&self, path: &str) -> io::Result<FileStatus> {
        self.stats
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemFs {
    type Handle = MemHandle;

    fn open(&self, path: &str) -> io::Result<MemHandle> {
        if self.deny_open.contains(path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let status = self.lookup(path)?;
        let entries = if status.kind.is_dir() {
            self.dirs.get(&normalize(path)).map(|e| e.clone().into_iter())
        } else {
            None
        };
        Ok(MemHandle {
            path: path.to_string(),
            entries,
        })
    }

    fn fstat(&self, handle: &MemHandle) -> io::Result<FileStatus> {
        if self.deny_stat.contains(&handle.path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.lookup(&handle.path)
    }

    fn stat(&self, path: &str) -> io::Result<FileStatus> {
        if self.deny_stat.contains(path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.lookup(path)
    }

    fn read_entry(&self, handle: &mut MemHandle) -> Option<DirEntry> {
        handle.entries.as_mut()?.next()
    }
}

/// Resolve "." and ".." segments textually so stats on paths the walker
/// builds ("root/sub/..") land on the right node.
fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(slash) => &path[..slash],
        None => "",
    }
}
