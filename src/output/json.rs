//! JSON output for the lister

use std::io;

use serde::Serialize;

use crate::fs::FileStatus;
use crate::name::{Padding, format_name};
use crate::walk::{WalkError, WalkSink};

/// One listed entry, serialized for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub inode: u64,
    pub size: u64,
}

/// Sink that buffers entries for serialization after the walk completes.
/// Diagnostics still go to stderr as they occur.
pub struct JsonCollector {
    entries: Vec<JsonEntry>,
    tool: &'static str,
}

impl JsonCollector {
    pub fn new(tool: &'static str) -> Self {
        Self {
            entries: Vec::new(),
            tool,
        }
    }

    pub fn entries(&self) -> &[JsonEntry] {
        &self.entries
    }
}

impl WalkSink for JsonCollector {
    fn entry(&mut self, path: &str, status: &FileStatus) -> io::Result<()> {
        let name = format_name(path, Padding::Null);
        self.entries.push(JsonEntry {
            name: name.trim_end_matches('\0').to_string(),
            path: path.to_string(),
            kind: status.kind.label(),
            inode: status.inode,
            size: status.size,
        });
        Ok(())
    }

    fn error(&mut self, err: &WalkError) -> io::Result<()> {
        eprintln!("{}: {}", self.tool, err);
        Ok(())
    }
}

/// Print collected entries as pretty-printed JSON to stdout.
pub fn print_json(entries: &[JsonEntry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
