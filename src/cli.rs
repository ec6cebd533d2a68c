use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::bracket::BuildMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "fight-bracket reconstruction")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Reconstruct brackets from a snapshot file
    Build {
        /// Snapshot file (tournament, single division or bare match list)
        #[arg(short, long)]
        input: PathBuf,
        /// Only build this division
        #[arg(short, long)]
        division: Option<String>,
        /// Builder to use
        #[arg(short, long, value_enum, default_value_t = BuildMode::Auto)]
        mode: BuildMode,
        /// Guess unresolved slots by date and build down to the leaves
        #[arg(long, conflicts_with = "strict")]
        lenient: bool,
        /// Stop when the data cannot fill a round and never guess
        #[arg(long)]
        strict: bool,
        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// List the divisions of a snapshot file
    Divisions {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Validate a snapshot file and add it to the snapshot store
    Import {
        #[arg(short, long)]
        input: PathBuf,
        /// Store key ([A-Za-z0-9_-])
        #[arg(short, long)]
        key: String,
    },
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `--lenient` / `--strict` as an override of the configured policy
pub fn fallback_override(lenient: bool, strict: bool) -> Option<bool> {
    if lenient {
        Some(true)
    } else if strict {
        Some(false)
    } else {
        None
    }
}
