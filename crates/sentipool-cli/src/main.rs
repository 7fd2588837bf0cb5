//! Sentipool CLI - Operator tooling for the sentiment annotation pool.

use clap::Parser;
use sentipool_cli::commands;
use sentipool_cli::{Cli, Command};
use sentipool_store::JsonFileStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> sentipool_cli::Result<()> {
    let cli = Cli::parse();

    let mut store = JsonFileStore::new(cli.data);

    match cli.command {
        Command::Import(args) => commands::execute_import(args, &mut store)?,
        Command::Report => commands::execute_report(&store)?,
        Command::Export(args) => commands::execute_export(args, &store)?,
    }

    Ok(())
}
