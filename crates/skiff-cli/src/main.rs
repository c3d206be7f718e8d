//! Skiff CLI - versioned SQL migrations for SQLite

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod confirm;
mod context;

use cli::Cli;
use commands::{create, down, reset, status, up};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Up => up::execute(&cli.global).await,
        cli::Commands::Down(args) => down::execute(args, &cli.global).await,
        cli::Commands::Create(args) => create::execute(args, &cli.global).await,
        cli::Commands::Reset => reset::execute(&cli.global).await,
        cli::Commands::Status => status::execute(&cli.global).await,
    }
}
