//! Pith - directory listing and recursive file search over a minimal filesystem core

pub mod fs;
pub mod name;
pub mod output;
pub mod walk;

pub use fs::{DirEntry, FileKind, FileStatus, Filesystem, NAME_SLOT, StdFilesystem};
pub use name::{Padding, format_name, is_self_or_parent};
pub use output::{FindFormatter, JsonCollector, ListFormatter, MatchPolicy, print_json};
pub use walk::{PathBuilder, PathOverflow, WalkError, WalkSink, Walker, WalkerConfig};
