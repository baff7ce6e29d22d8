//! Output formatting for the two tools
//!
//! Each formatter implements the walker's sink trait: the lister prints
//! fixed-width entry lines, the find formatter prints matching paths, and the
//! JSON collector buffers entries for serialization. Diagnostics go to stderr
//! prefixed with the tool name.

mod find;
mod json;
mod list;

pub use find::{FindFormatter, MatchPolicy};
pub use json::{JsonCollector, JsonEntry, print_json};
pub use list::ListFormatter;
