//! The traversal engine shared by listing and search

use std::io;

use thiserror::Error;

use crate::fs::{FileKind, FileStatus, Filesystem};
use crate::name::is_self_or_parent;

use super::config::WalkerConfig;
use super::path::PathBuilder;

/// A failure local to one path or subtree. Reported through the sink and
/// never fatal to the rest of the walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("cannot open {0}")]
    CannotOpen(String),
    #[error("cannot stat {0}")]
    CannotStat(String),
    #[error("path too long")]
    PathTooLong,
}

/// Visitor seam between the engine and the tools.
///
/// `entry` receives every visited path with its freshly fetched status; the
/// implementation decides what (if anything) to print. `error` receives
/// per-path diagnostics. Both return `io::Result` so output failures
/// propagate, while filesystem failures stay local.
pub trait WalkSink {
    fn entry(&mut self, path: &str, status: &FileStatus) -> io::Result<()>;

    fn error(&mut self, err: &WalkError) -> io::Result<()>;
}

/// Depth-first tree walker over any [`Filesystem`].
///
/// Recursion depth is naturally capped: every level adds at least one byte of
/// separator to the bounded path buffer, so the buffer capacity bounds the
/// native call stack as well.
pub struct Walker<'fs, F: Filesystem> {
    fs: &'fs F,
    config: WalkerConfig,
}

impl<'fs, F: Filesystem> Walker<'fs, F> {
    pub fn new(fs: &'fs F) -> Self {
        Self {
            fs,
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(fs: &'fs F, config: WalkerConfig) -> Self {
        Self { fs, config }
    }

    /// Enumerate exactly one level.
    ///
    /// A file or device path is emitted as a single entry with no directory
    /// read. A directory path emits each of its entries ("." and ".."
    /// included) without recursing.
    pub fn list<S: WalkSink>(&self, path: &str, sink: &mut S) -> io::Result<()> {
        let Ok(mut handle) = self.fs.open(path) else {
            return sink.error(&WalkError::CannotOpen(path.to_string()));
        };
        let status = match self.fs.fstat(&handle) {
            Ok(status) => status,
            Err(_) => return sink.error(&WalkError::CannotStat(path.to_string())),
        };

        if !status.kind.is_dir() {
            return sink.entry(path, &status);
        }

        let mut base = match PathBuilder::with_base(path, self.config.path_cap) {
            Ok(base) => base,
            Err(_) => return sink.error(&WalkError::PathTooLong),
        };
        while let Some(entry) = self.fs.read_entry(&mut handle) {
            if entry.inode == 0 {
                continue;
            }
            let child = base.child(&entry.name);
            match self.fs.stat(child) {
                Ok(child_status) => sink.entry(child, &child_status)?,
                Err(_) => sink.error(&WalkError::CannotStat(child.to_string()))?,
            }
        }
        Ok(())
    }

    /// Walk depth-first from `path`, visiting every reachable path.
    ///
    /// Each path is handed to the sink before any descent into it, so a
    /// directory's own visit always precedes its children's. Self/parent
    /// entries are stat'd like any other but never recursed into.
    pub fn search<S: WalkSink>(&self, path: &str, sink: &mut S) -> io::Result<()> {
        let Ok(mut handle) = self.fs.open(path) else {
            return sink.error(&WalkError::CannotOpen(path.to_string()));
        };
        let status = match self.fs.fstat(&handle) {
            Ok(status) => status,
            Err(_) => return sink.error(&WalkError::CannotStat(path.to_string())),
        };

        sink.entry(path, &status)?;

        if status.kind != FileKind::Dir {
            return Ok(());
        }

        let mut base = match PathBuilder::with_base(path, self.config.path_cap) {
            Ok(base) => base,
            // Abandon this subtree only; siblings elsewhere continue.
            Err(_) => return sink.error(&WalkError::PathTooLong),
        };
        while let Some(entry) = self.fs.read_entry(&mut handle) {
            if entry.inode == 0 {
                continue;
            }
            let child = base.child(&entry.name).to_string();
            if self.fs.stat(&child).is_err() {
                sink.error(&WalkError::CannotStat(child))?;
                continue;
            }
            if is_self_or_parent(&entry.name) {
                continue;
            }
            self.search(&child, sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mem::MemFs;

    /// Sink that records every visit and error, in order.
    #[derive(Default)]
    struct Recorder {
        entries: Vec<(String, FileStatus)>,
        errors: Vec<WalkError>,
    }

    impl WalkSink for Recorder {
        fn entry(&mut self, path: &str, status: &FileStatus) -> io::Result<()> {
            self.entries.push((path.to_string(), status.clone()));
            Ok(())
        }

        fn error(&mut self, err: &WalkError) -> io::Result<()> {
            self.errors.push(err.clone());
            Ok(())
        }
    }

    fn sample_tree() -> MemFs {
        let mut fs = MemFs::new();
        fs.dir("root")
            .file("root/a.txt", 12)
            .dir("root/sub")
            .file("root/sub/b.txt", 34);
        fs
    }

    fn visited(recorder: &Recorder) -> Vec<&str> {
        recorder.entries.iter().map(|(p, _)| p.as_str()).collect()
    }

    #[test]
    fn test_list_enumerates_one_level_with_pseudo_entries() {
        let fs = sample_tree();
        let mut recorder = Recorder::default();
        Walker::new(&fs).list("root", &mut recorder).unwrap();

        assert_eq!(
            visited(&recorder),
            vec!["root/.", "root/..", "root/a.txt", "root/sub"]
        );
        assert!(recorder.errors.is_empty());
        // One level only: nothing from inside sub
        assert!(!visited(&recorder).contains(&"root/sub/b.txt"));
    }

    #[test]
    fn test_list_single_file_emits_one_entry() {
        let fs = sample_tree();
        let mut recorder = Recorder::default();
        Walker::new(&fs).list("root/a.txt", &mut recorder).unwrap();

        assert_eq!(visited(&recorder), vec!["root/a.txt"]);
        assert_eq!(recorder.entries[0].1.size, 12);
    }

    #[test]
    fn test_list_device_is_a_leaf() {
        let mut fs = MemFs::new();
        fs.dir("dev").device("dev/console");
        let mut recorder = Recorder::default();
        Walker::new(&fs).list("dev/console", &mut recorder).unwrap();

        assert_eq!(visited(&recorder), vec!["dev/console"]);
        assert_eq!(recorder.entries[0].1.kind, FileKind::Device);
    }

    #[test]
    fn test_list_skips_tombstoned_slots() {
        let mut fs = sample_tree();
        fs.tombstone("root");
        let mut recorder = Recorder::default();
        Walker::new(&fs).list("root", &mut recorder).unwrap();

        assert_eq!(visited(&recorder).len(), 4);
        assert!(recorder.errors.is_empty());
    }

    #[test]
    fn test_list_reports_open_failure() {
        let mut fs = sample_tree();
        fs.deny_open("root");
        let mut recorder = Recorder::default();
        Walker::new(&fs).list("root", &mut recorder).unwrap();

        assert!(visited(&recorder).is_empty());
        assert_eq!(
            recorder.errors,
            vec![WalkError::CannotOpen("root".to_string())]
        );
    }

    #[test]
    fn test_list_child_stat_failure_skips_only_that_child() {
        let mut fs = sample_tree();
        fs.deny_stat("root/a.txt");
        let mut recorder = Recorder::default();
        Walker::new(&fs).list("root", &mut recorder).unwrap();

        assert_eq!(visited(&recorder), vec!["root/.", "root/..", "root/sub"]);
        assert_eq!(
            recorder.errors,
            vec![WalkError::CannotStat("root/a.txt".to_string())]
        );
    }

    #[test]
    fn test_search_visits_every_path_once() {
        let fs = sample_tree();
        let mut recorder = Recorder::default();
        Walker::new(&fs).search("root", &mut recorder).unwrap();

        assert_eq!(
            visited(&recorder),
            vec!["root", "root/a.txt", "root/sub", "root/sub/b.txt"]
        );
        assert!(recorder.errors.is_empty());
    }

    #[test]
    fn test_search_visits_directory_before_its_children() {
        let fs = sample_tree();
        let mut recorder = Recorder::default();
        Walker::new(&fs).search("root", &mut recorder).unwrap();

        let paths = visited(&recorder);
        let dir = paths.iter().position(|p| *p == "root/sub").unwrap();
        let child = paths.iter().position(|p| *p == "root/sub/b.txt").unwrap();
        assert!(dir < child);
    }

    #[test]
    fn test_search_never_recurses_into_pseudo_entries() {
        // "." and ".." are present in every MemFs directory; if recursion did
        // not prune them the walk would revisit paths without end. Visiting
        // each real path exactly once proves the pruning.
        let fs = sample_tree();
        let mut recorder = Recorder::default();
        Walker::new(&fs).search("root", &mut recorder).unwrap();

        assert_eq!(visited(&recorder).len(), 4);
    }

    #[test]
    fn test_search_reports_path_too_long_and_continues_siblings() {
        let mut fs = MemFs::new();
        fs.dir("root")
            .dir("root/deep_dir")
            .file("root/deep_dir/x", 1)
            .file("root/z.txt", 2);

        // Capacity fits "root" plus one slot, but not "root/deep_dir" plus one.
        let config = WalkerConfig { path_cap: 22 };
        let mut recorder = Recorder::default();
        Walker::with_config(&fs, config)
            .search("root", &mut recorder)
            .unwrap();

        assert_eq!(recorder.errors, vec![WalkError::PathTooLong]);
        let paths = visited(&recorder);
        assert!(paths.contains(&"root/deep_dir"));
        assert!(!paths.contains(&"root/deep_dir/x"));
        // Sibling after the offending subtree still visited
        assert!(paths.contains(&"root/z.txt"));
    }

    #[test]
    fn test_search_child_stat_failure_skips_only_that_subtree() {
        let mut fs = sample_tree();
        fs.deny_stat("root/sub");
        let mut recorder = Recorder::default();
        Walker::new(&fs).search("root", &mut recorder).unwrap();

        let paths = visited(&recorder);
        assert!(paths.contains(&"root/a.txt"));
        assert!(!paths.contains(&"root/sub"));
        assert!(!paths.contains(&"root/sub/b.txt"));
        assert_eq!(
            recorder.errors,
            vec![WalkError::CannotStat("root/sub".to_string())]
        );
    }

    #[test]
    fn test_search_missing_root_reports_cannot_open() {
        let fs = MemFs::new();
        let mut recorder = Recorder::default();
        Walker::new(&fs).search("nowhere", &mut recorder).unwrap();

        assert!(visited(&recorder).is_empty());
        assert_eq!(
            recorder.errors,
            vec![WalkError::CannotOpen("nowhere".to_string())]
        );
    }

    #[test]
    fn test_error_display_matches_diagnostic_format() {
        assert_eq!(
            WalkError::CannotOpen("root".to_string()).to_string(),
            "cannot open root"
        );
        assert_eq!(
            WalkError::CannotStat("root/a".to_string()).to_string(),
            "cannot stat root/a"
        );
        assert_eq!(WalkError::PathTooLong.to_string(), "path too long");
    }
}
