use std::path::PathBuf;

use branchtree::domain::value_objects::Placement;
use clap::{Parser, Subcommand};

/// branchtree - branch-aware repository file browser
#[derive(Parser, Debug)]
#[command(name = "branchtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to .branchtree.toml next to the snapshot, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every file and folder of a repository snapshot
    Ls {
        /// Repository snapshot (JSON)
        snapshot: PathBuf,

        /// Branch to list (defaults to the repository's default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Column layout
        #[arg(long, value_enum)]
        placement: Option<Placement>,
    },

    /// Delete a file from a repository snapshot
    Rm {
        /// Repository snapshot (JSON)
        snapshot: PathBuf,

        /// Path of the file, e.g. /src/lib.rs
        path: String,

        /// Branch to delete on (defaults to the repository's default branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Browse a repository snapshot interactively
    Browse {
        /// Repository snapshot (JSON)
        snapshot: PathBuf,

        /// Column layout
        #[arg(long, value_enum)]
        placement: Option<Placement>,
    },
}
