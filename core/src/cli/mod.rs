pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for opgmetrics
#[derive(Parser, Debug)]
#[command(name = "opgmetrics")]
#[command(about = "Calibrated canine measurements from one annotated OPG radiograph")]
#[command(version)]
pub struct Cli {
    /// Path to the OPG image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Path to the annotation file (defaults to the image path with a
    /// .txt extension)
    #[arg(value_name = "LABEL")]
    pub label: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Magnification correction divisor applied to the calibration
    #[arg(short, long)]
    pub magnification: Option<f64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
