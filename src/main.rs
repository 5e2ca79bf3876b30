//! branchtree CLI - branch-aware repository file browser
//!
//! Usage: branchtree <COMMAND>
//!
//! Commands:
//!   ls      List a repository snapshot as tree rows
//!   rm      Delete a file through the confirm-then-delete workflow
//!   browse  Interactive tree view

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    branchtree::logging::init_logger(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Ls {
            snapshot,
            branch,
            placement,
        } => commands::list::cmd_ls(
            &snapshot,
            branch.as_deref(),
            placement,
            config,
            cli.json,
            cli.verbose,
        ),
        Commands::Rm {
            snapshot,
            path,
            branch,
            yes,
        } => commands::remove::cmd_rm(&snapshot, &path, branch.as_deref(), yes, config, cli.json),
        Commands::Browse {
            snapshot,
            placement,
        } => commands::browse::cmd_browse(&snapshot, placement, config, cli.json, cli.verbose),
    }
}
