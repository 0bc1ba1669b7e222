//! Command-line interface for idb.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{CliOverrides, Config};
use crate::logging;
use crate::presenter::TerminalPresenter;

/// idb - source control for your brilliant ideas.
#[derive(Parser, Debug)]
#[command(name = "idb")]
#[command(
    author,
    version,
    about = "Source control for your brilliant ideas!!",
    long_about = None,
    after_help = "Ideas are addressed by the first 7 characters of their hash, or the full 64."
)]
pub struct Cli {
    /// Store directory (default: ~/.idb)
    #[arg(long, global = true, env = "IDB_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/idb/config.yaml)
    #[arg(long, global = true, env = "IDB_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Init a global repo of ideas (discards existing ideas)
    Init,

    /// List ideas
    List(ListArgs),

    /// Add an idea
    Add(AddArgs),

    /// Edit an idea
    Edit(EditArgs),

    /// Mark idea as done/complete
    Mark(HashArgs),

    /// Unmark idea from done/complete
    Unmark(HashArgs),

    /// Remove idea (alias: delete)
    #[command(name = "rm", alias = "delete")]
    Remove(HashArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// List only marked ideas
    #[arg(short, long, conflicts_with = "unmarked")]
    pub marked: bool,

    /// List only unmarked ideas
    #[arg(short, long)]
    pub unmarked: bool,

    /// List only hashes with titles
    #[arg(short = 'H', long)]
    pub hash: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Your brilliant idea
    pub idea: String,

    /// Add an idea description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Hash of your idea (7 or 64 characters)
    pub hash: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct HashArgs {
    /// Hash of your idea (7 or 64 characters)
    pub hash: String,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dir: cli.dir.clone(),
        config: cli.config.clone(),
    };
    let config = Config::load(&overrides)?;

    logging::init_logging(cli.verbose, cli.quiet, config.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    tracing::debug!(command = command.name(), store = %config.store_dir.display(), "Dispatching");
    let store = config.store();

    match command {
        Commands::Init => commands::init::execute(&store, cli.json)?,
        Commands::List(args) => {
            let mut presenter = TerminalPresenter::detect();
            commands::list::execute(&args, &store, cli.json, &mut presenter)?;
        }
        Commands::Add(args) => commands::add::execute(&args, &store, cli.json)?,
        Commands::Edit(args) => commands::edit::execute(&args, &store, cli.json)?,
        Commands::Mark(args) => commands::mark::execute(&args, &store, true, cli.json)?,
        Commands::Unmark(args) => commands::mark::execute(&args, &store, false, cli.json)?,
        Commands::Remove(args) => commands::remove::execute(&args, &store, cli.json)?,
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::List(_) => "list",
            Self::Add(_) => "add",
            Self::Edit(_) => "edit",
            Self::Mark(_) => "mark",
            Self::Unmark(_) => "unmark",
            Self::Remove(_) => "rm",
        }
    }
}
