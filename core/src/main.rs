use clap::Parser;
use log::info;
use opgmetrics_core::cli::{Cli, OutputFormat};
use opgmetrics_core::{AnalysisOptions, OpgAnalyzer, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let label_path = cli
        .label
        .clone()
        .unwrap_or_else(|| cli.image.with_extension("txt"));

    let label_text = match std::fs::read_to_string(&label_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read label {}: {}", label_path.display(), e);
            process::exit(1);
        }
    };

    let (width, height) = match image::image_dimensions(&cli.image) {
        Ok(dims) => dims,
        Err(e) => {
            eprintln!("Error: cannot read image {}: {}", cli.image.display(), e);
            process::exit(1);
        }
    };
    info!(
        "{}: {} x {} px",
        cli.image.display(),
        width,
        height
    );

    let options = AnalysisOptions {
        magnification: cli.magnification,
    };
    let record = match OpgAnalyzer::analyze_with_options(
        &cli.image,
        &label_text,
        width,
        height,
        &options,
    ) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Text => println!("{}", TextReport::new(&record)),
        OutputFormat::Json => match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize record: {}", e);
                process::exit(1);
            }
        },
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
