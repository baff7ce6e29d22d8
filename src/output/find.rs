//! Find formatter: prints the full path of every name match

use std::io::{self, Write};

use glob::{Pattern, PatternError};

use crate::fs::FileStatus;
use crate::name::{Padding, format_name};
use crate::walk::{WalkError, WalkSink};

/// How a visited path's formatted name is matched against the target.
pub enum MatchPolicy {
    /// Byte-for-byte equality with the target name.
    Exact(String),
    /// Glob pattern over the name (`b*.txt`, `*.rs`, ...).
    Glob(Pattern),
}

impl MatchPolicy {
    pub fn exact(target: &str) -> Self {
        MatchPolicy::Exact(target.to_string())
    }

    pub fn glob(pattern: &str) -> Result<Self, PatternError> {
        Ok(MatchPolicy::Glob(Pattern::new(pattern)?))
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            MatchPolicy::Exact(target) => name == target,
            MatchPolicy::Glob(pattern) => pattern.matches(name),
        }
    }
}

/// Prints each visited path whose formatted name matches the policy.
pub struct FindFormatter<W: Write> {
    out: W,
    policy: MatchPolicy,
    tool: &'static str,
}

impl<W: Write> FindFormatter<W> {
    pub fn new(tool: &'static str, policy: MatchPolicy, out: W) -> Self {
        Self { out, policy, tool }
    }
}

impl<W: Write> WalkSink for FindFormatter<W> {
    fn entry(&mut self, path: &str, _status: &FileStatus) -> io::Result<()> {
        // Null padding is the comparison policy; strip it back off so targets
        // of any length compare against the true name.
        let padded = format_name(path, Padding::Null);
        let name = padded.trim_end_matches('\0');
        if self.policy.matches(name) {
            writeln!(self.out, "{}", path)?;
        }
        Ok(())
    }

    fn error(&mut self, err: &WalkError) -> io::Result<()> {
        eprintln!("{}: {}", self.tool, err);
        Ok(())
    }
}
