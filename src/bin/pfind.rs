//! CLI entry point for pfind, the recursive file-name search

use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use pith::{FindFormatter, MatchPolicy, StdFilesystem, Walker};

#[derive(Parser, Debug)]
#[command(name = "pfind")]
#[command(about = "Search a directory tree for entries by name")]
#[command(override_usage = "pfind [PATH] <TARGET>")]
#[command(version)]
struct Args {
    /// Path to search and name to find; with a single argument, the current
    /// directory is searched for that name
    #[arg(value_name = "ARGS", num_args = 0..=2)]
    args: Vec<String>,

    /// Treat the target as a glob pattern instead of an exact name
    #[arg(short = 'g', long = "glob")]
    glob: bool,
}

fn main() {
    let args = Args::parse();

    let (path, target) = match args.args.as_slice() {
        // No arguments: print usage and exit cleanly without searching.
        [] => {
            Args::command().print_help().ok();
            return;
        }
        [target] => (".".to_string(), target.clone()),
        [path, target, ..] => (path.clone(), target.clone()),
    };

    let policy = if args.glob {
        match MatchPolicy::glob(&target) {
            Ok(policy) => policy,
            Err(e) => {
                eprintln!("pfind: invalid glob pattern '{}': {}", target, e);
                process::exit(1);
            }
        }
    } else {
        MatchPolicy::exact(&target)
    };

    let fs = StdFilesystem;
    let walker = Walker::new(&fs);
    let mut formatter = FindFormatter::new("pfind", policy, io::stdout().lock());

    if let Err(e) = walker.search(&path, &mut formatter) {
        eprintln!("pfind: error writing output: {}", e);
        process::exit(1);
    }
}
