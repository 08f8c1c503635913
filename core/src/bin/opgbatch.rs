use clap::Parser;
use log::{error, info, warn};
use opgmetrics_core::{AnalysisOptions, JsonStore, OpgAnalyzer, RecordStore};
use std::path::{Path, PathBuf};
use std::process;

/// CLI tool for measuring a whole directory of annotated OPG radiographs
///
/// Expects the dataset layout `<base>/images/*.jpg` with matching
/// `<base>/labels/<stem>.txt` annotation files.
#[derive(Parser, Debug)]
#[command(name = "opgbatch")]
#[command(about = "Batch canine measurement over an annotated OPG dataset")]
#[command(version)]
struct Cli {
    /// Dataset base directory containing images/ and labels/
    #[arg(value_name = "BASE_DIR")]
    base_dir: PathBuf,

    /// JSON record store path (upserted by title)
    #[arg(short, long, default_value = "opg_records.json")]
    store: PathBuf,

    /// Also export all stored records to this CSV file
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Magnification correction divisor applied to the calibration
    #[arg(short, long)]
    magnification: Option<f64>,

    /// Render measurement overlays into this directory
    #[cfg(feature = "overlay")]
    #[arg(long, value_name = "DIR")]
    overlay_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let image_dir = cli.base_dir.join("images");
    let label_dir = cli.base_dir.join("labels");
    if !image_dir.is_dir() {
        eprintln!("Error: {} is not a directory", image_dir.display());
        process::exit(1);
    }

    let images = match collect_image_files(&image_dir) {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to read directory: {}", e);
            eprintln!("Error: Failed to read {}: {}", image_dir.display(), e);
            process::exit(1);
        }
    };
    if images.is_empty() {
        eprintln!("Error: no images found in {}", image_dir.display());
        process::exit(1);
    }
    info!("Found {} OPG images", images.len());

    let mut store = match JsonStore::open(&cli.store) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: cannot open store {}: {}", cli.store.display(), e);
            process::exit(1);
        }
    };

    let options = AnalysisOptions {
        magnification: cli.magnification,
    };

    let mut processed = 0usize;
    let mut skipped = 0usize;
    for image_path in &images {
        match process_image(image_path, &label_dir, &options, &mut store, &cli) {
            Ok(title) => {
                info!("Stored {}", title);
                processed += 1;
            }
            Err(e) => {
                // Per-file failures never abort the batch
                warn!("Skipping {}: {}", image_path.display(), e);
                skipped += 1;
            }
        }
    }

    if let Err(e) = store.flush() {
        eprintln!("Error: failed to write store {}: {}", cli.store.display(), e);
        process::exit(1);
    }

    if let Some(csv_path) = &cli.csv {
        match opgmetrics_core::write_csv(store.records(), csv_path) {
            Ok(rows) => info!("Exported {} rows to {}", rows, csv_path.display()),
            Err(e) => {
                eprintln!("Error: CSV export failed: {}", e);
                process::exit(1);
            }
        }
    }

    println!(
        "Processed {} files ({} skipped), {} records in {}",
        processed,
        skipped,
        store.len(),
        cli.store.display()
    );
}

fn process_image(
    image_path: &Path,
    label_dir: &Path,
    options: &AnalysisOptions,
    store: &mut JsonStore,
    cli: &Cli,
) -> opgmetrics_core::Result<String> {
    let stem = image_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let label_path = label_dir.join(format!("{stem}.txt"));
    if !label_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("missing label {}", label_path.display()),
        )
        .into());
    }

    let label_text = std::fs::read_to_string(&label_path)?;
    let (width, height) = image::image_dimensions(image_path)?;
    info!("{}: {} x {} px", image_path.display(), width, height);

    let record =
        OpgAnalyzer::analyze_with_options(image_path, &label_text, width, height, options)?;
    let title = record.title.clone();

    #[cfg(feature = "overlay")]
    if let Some(overlay_dir) = &cli.overlay_dir {
        let labels = OpgAnalyzer::parse_labels(&label_text);
        // Overlay problems are cosmetic; log and keep the record
        if let Err(e) = opgmetrics_core::overlay::render_overlay(image_path, &labels, overlay_dir)
        {
            warn!("Overlay failed for {}: {}", image_path.display(), e);
        }
    }
    #[cfg(not(feature = "overlay"))]
    let _ = cli;

    store.upsert(record)?;
    Ok(title)
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

fn collect_image_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("jpg")
                    || ext.eq_ignore_ascii_case("jpeg")
                    || ext.eq_ignore_ascii_case("png")
                {
                    files.push(path);
                }
            }
        }
    }

    // Deterministic processing order (there is no cross-file dependency,
    // but stable logs make reruns comparable)
    files.sort();
    Ok(files)
}
