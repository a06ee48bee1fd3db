use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use symptom_lens_lib::config::{self, ExtractionConfig};
use symptom_lens_lib::dictionary::{save_custom_symptoms, DictionaryError};
use symptom_lens_lib::{group_segments_by_date, init_tracing, validate_and_fix_dates, SymptomEngine};

#[derive(Parser)]
#[command(
    name = "symptom-lens",
    version,
    about = "Extract symptom records and per-day catch-up segments from free text"
)]
struct Cli {
    /// Custom-symptom file (defaults to the app data directory)
    #[arg(long, global = true)]
    custom_symptoms: Option<PathBuf>,

    /// JSON file overriding extraction window sizes
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract symptoms from text
    Extract { text: String },
    /// Split a narrative into dated segments
    Segment {
        text: String,
        /// Reference time, e.g. "2024-03-16T09:30:00" or "2024-03-16"
        #[arg(long, value_parser = parse_reference)]
        reference: Option<NaiveDateTime>,
        /// Merge segments falling on the same day
        #[arg(long)]
        group: bool,
    },
    /// Segment a narrative by day and extract symptoms for each day
    CatchUp {
        text: String,
        #[arg(long, value_parser = parse_reference)]
        reference: Option<NaiveDateTime>,
    },
    /// Map a word to a symptom in the custom dictionary
    AddSymptom { word: String, symptom: String },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .ok_or_else(|| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, got '{value}'"))
}

fn load_config(path: Option<&PathBuf>) -> Result<ExtractionConfig, CliError> {
    let Some(path) = path else {
        return Ok(ExtractionConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&json).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let custom_path = cli.custom_symptoms.unwrap_or_else(config::custom_symptoms_path);
    let engine = SymptomEngine::load(&custom_path, load_config(cli.config.as_ref())?)?;

    match cli.command {
        Command::Extract { text } => print_json(&engine.extract_symptoms(&text)),
        Command::Segment {
            text,
            reference,
            group,
        } => {
            let segments = engine.segment_by_date(&text, reference);
            if group {
                let reference = reference.unwrap_or_else(symptom_lens_lib::temporal::default_reference);
                print_json(&validate_and_fix_dates(group_segments_by_date(&segments), reference))
            } else {
                print_json(&segments)
            }
        }
        Command::CatchUp { text, reference } => print_json(&engine.catch_up(&text, reference)),
        Command::AddSymptom { word, symptom } => {
            engine.add_custom_symptom(&word, &symptom)?;
            save_custom_symptoms(&custom_path, &engine.custom_symptoms())?;
            tracing::info!(path = %custom_path.display(), "Custom symptom saved");
            print_json(&engine.custom_symptoms())
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
