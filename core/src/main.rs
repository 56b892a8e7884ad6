use clap::Parser;
use labmeta_core::cli::report::{SpecimenReport, TextReport};
use labmeta_core::cli::{Cli, Command, OutputFormat};
use labmeta_core::{ProcedureExtractor, Result};
use log::{error, info};
use serde::Serialize;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Surgery {
            file,
            schema_version,
        } => {
            info!("Mapping surgery request: {}", file.display());
            let metadata = ProcedureExtractor::extract_file(&file, schema_version.map(Into::into))?;
            match cli.format {
                OutputFormat::Text => println!("{}", TextReport::new(&metadata)),
                OutputFormat::Json => println!("{}", to_json(&metadata)?),
            }
        }
        Command::Histology { file } => {
            info!("Mapping histology runs: {}", file.display());
            let procedures = ProcedureExtractor::specimen_procedures_file(&file)?;
            match cli.format {
                OutputFormat::Text => println!("{}", SpecimenReport::new(&procedures)),
                OutputFormat::Json => println!("{}", to_json(&procedures)?),
            }
        }
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_surgery_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Date_x0020_of_x0020_Surgery": "2024-01-10T08:00:00Z"}}"#).unwrap();

        let cli = Cli::try_parse_from([
            "labmeta",
            "--format",
            "json",
            "surgery",
            file.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_run_histology_missing_file() {
        let cli = Cli::try_parse_from(["labmeta", "histology", "/nonexistent/runs.json"]).unwrap();
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_to_json_tags_procedures() {
        let metadata = ProcedureExtractor::extract(&Default::default());
        let json = to_json(&metadata).unwrap();
        assert!(json.contains("\"experimenter_full_name\": \"NSB\""));
        assert!(json.contains("\"surgeries\": []"));
    }
}
