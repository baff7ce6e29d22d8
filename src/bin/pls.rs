//! CLI entry point for pls, the one-level directory lister

use std::io::IsTerminal;
use std::process;

use clap::{Parser, ValueEnum};
use pith::{JsonCollector, ListFormatter, StdFilesystem, Walker, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pls")]
#[command(about = "List directory entries with type, inode, and size")]
#[command(version)]
struct Args {
    /// Paths to list; defaults to the current directory
    paths: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let paths = if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths.clone()
    };

    let fs = StdFilesystem;
    let walker = Walker::new(&fs);

    // Per-path failures are diagnostics, not exit-code failures; only an
    // output-write error is fatal.
    let result = if args.json {
        let mut collector = JsonCollector::new("pls");
        paths
            .iter()
            .try_for_each(|path| walker.list(path, &mut collector))
            .and_then(|()| print_json(collector.entries()))
    } else {
        let mut formatter = ListFormatter::new("pls", should_use_color(args.color));
        paths
            .iter()
            .try_for_each(|path| walker.list(path, &mut formatter))
    };

    if let Err(e) = result {
        eprintln!("pls: error writing output: {}", e);
        process::exit(1);
    }
}
