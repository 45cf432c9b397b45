//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SafeSight: heuristic file and URL triage
#[derive(Parser, Debug)]
#[command(name = "safesight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for machine processing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a file
    File {
        /// Path to the file to analyze
        path: PathBuf,

        /// Declared file name, when it differs from the path's file name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Analyze a URL
    Url {
        /// URL to analyze
        url: String,

        /// Skip the network-bound checks (domain age, DNS, page fetch)
        #[arg(long)]
        no_fetch: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_command_parses() {
        let cli = Cli::parse_from(["safesight", "file", "sample.pdf"]);
        match cli.command {
            Some(Commands::File { path, name }) => {
                assert_eq!(path, PathBuf::from("sample.pdf"));
                assert!(name.is_none());
            }
            _ => panic!("expected file command"),
        }
    }

    #[test]
    fn test_url_command_with_no_fetch() {
        let cli = Cli::parse_from([
            "safesight",
            "--format",
            "json",
            "url",
            "--no-fetch",
            "example.com",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Url { url, no_fetch }) => {
                assert_eq!(url, "example.com");
                assert!(no_fetch);
            }
            _ => panic!("expected url command"),
        }
    }
}
