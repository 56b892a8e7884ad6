pub mod report;

use crate::nsb::SchemaVersion;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for labmeta
#[derive(Parser, Debug)]
#[command(name = "labmeta")]
#[command(about = "Map NSB surgery requests and SLIMS histology runs to procedure metadata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Map one NSB surgery request (JSON object)
    Surgery {
        /// Path to the request JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Read the request as this list version instead of its own
        #[arg(long)]
        schema_version: Option<SchemaVersionArg>,
    },
    /// Map SLIMS histology runs (JSON array)
    Histology {
        /// Path to the histology JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// NSB list generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaVersionArg {
    V2023,
    V2024,
}

impl From<SchemaVersionArg> for SchemaVersion {
    fn from(arg: SchemaVersionArg) -> Self {
        match arg {
            SchemaVersionArg::V2023 => SchemaVersion::V2023,
            SchemaVersionArg::V2024 => SchemaVersion::V2024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_surgery_command() {
        let cli = Cli::try_parse_from([
            "labmeta",
            "--format",
            "json",
            "surgery",
            "request.json",
            "--schema-version",
            "v2023",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(!cli.verbose);
        match cli.command {
            Command::Surgery {
                file,
                schema_version,
            } => {
                assert_eq!(file, PathBuf::from("request.json"));
                assert_eq!(
                    schema_version.map(SchemaVersion::from),
                    Some(SchemaVersion::V2023)
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_histology_command() {
        let cli = Cli::try_parse_from(["labmeta", "histology", "runs.json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(matches!(cli.command, Command::Histology { .. }));
    }

    #[test]
    fn test_missing_command_is_rejected() {
        assert!(Cli::try_parse_from(["labmeta"]).is_err());
    }
}
