//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentipool CLI - Operate the crowd-sourced sentiment annotation pool.
#[derive(Debug, Parser)]
#[command(name = "sentipool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the sentence pool JSON document
    #[arg(short, long, global = true, default_value = "combined_data.json")]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed sentences into the pool from a text file
    Import(ImportArgs),

    /// Show the annotation-count distribution of the pool
    Report,

    /// Export resolved labels to CSV
    Export(ExportArgs),
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Text file with one sentence per line
    pub file: PathBuf,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output CSV path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Also emit sentences resolved as neutral (label 2)
    #[arg(long)]
    pub include_neutral: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_command() {
        let cli = Cli::parse_from(["sentipool", "import", "sentences.txt"]);
        match cli.command {
            Command::Import(args) => assert_eq!(args.file, PathBuf::from("sentences.txt")),
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_export_command_flags() {
        let cli = Cli::parse_from([
            "sentipool",
            "export",
            "--output",
            "labels.csv",
            "--include-neutral",
        ]);
        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.output, PathBuf::from("labels.csv"));
                assert!(args.include_neutral);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_data_path_defaults() {
        let cli = Cli::parse_from(["sentipool", "report"]);
        assert_eq!(cli.data, PathBuf::from("combined_data.json"));
    }

    #[test]
    fn test_data_path_override() {
        let cli = Cli::parse_from(["sentipool", "--data", "/tmp/pool.json", "report"]);
        assert_eq!(cli.data, PathBuf::from("/tmp/pool.json"));
    }
}
