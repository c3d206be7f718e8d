//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Skiff - apply and revert versioned SQL migrations against SQLite
#[derive(Parser, Debug)]
#[command(name = "skiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (holds skiff.yml, the migrations
    /// directory, and the database file)
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply all pending migrations
    Up,

    /// Revert the N most recently applied migrations (or all)
    Down(DownArgs),

    /// Scaffold a new migration file
    Create(CreateArgs),

    /// Revert every applied migration, then reapply all of them
    Reset,

    /// Show each migration file and whether it has been applied
    Status,
}

/// Arguments for the down command
#[derive(Args, Debug)]
pub struct DownArgs {
    /// How many migrations to revert: a positive integer or "all"
    #[arg(default_value = "1")]
    pub step: String,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name for the new migration (becomes part of the file name)
    pub name: String,
}
