//! Listing formatter: one fixed-width line per entry

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::fs::FileStatus;
use crate::name::{Padding, format_name};
use crate::walk::{WalkError, WalkSink};

/// Prints `<space-padded-name> <type> <inode> <size>` per entry to stdout.
/// Directory names are colored when color is enabled.
pub struct ListFormatter {
    stdout: StandardStream,
    tool: &'static str,
}

impl ListFormatter {
    pub fn new(tool: &'static str, use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            tool,
        }
    }
}

impl WalkSink for ListFormatter {
    fn entry(&mut self, path: &str, status: &FileStatus) -> io::Result<()> {
        let name = format_name(path, Padding::Space);
        if status.kind.is_dir() {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.stdout, "{}", name.trim_end())?;
            self.stdout.reset()?;
            // Re-pad outside the colored span so columns stay aligned.
            write!(self.stdout, "{}", &name[name.trim_end().len()..])?;
        } else {
            write!(self.stdout, "{}", name)?;
        }
        writeln!(
            self.stdout,
            " {} {} {}",
            status.kind.code(),
            status.inode,
            status.size
        )
    }

    fn error(&mut self, err: &WalkError) -> io::Result<()> {
        eprintln!("{}: {}", self.tool, err);
        Ok(())
    }
}
