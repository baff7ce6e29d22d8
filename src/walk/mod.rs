//! Directory tree traversal
//!
//! Two operations share one engine: `list` enumerates exactly one level of a
//! directory (pseudo-entries included), `search` walks depth-first, visiting
//! each path before deciding whether to descend. All per-path failures are
//! reported through the sink and never abort the rest of the walk.

mod config;
mod path;
mod walker;

pub use config::WalkerConfig;
pub use path::{PathBuilder, PathOverflow};
pub use walker::{WalkError, WalkSink, Walker};
