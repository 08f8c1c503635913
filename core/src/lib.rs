pub mod api;
pub mod cli;
pub mod error;
pub mod geometry;
#[cfg(feature = "overlay")]
pub mod overlay;
pub mod parsing;
pub mod store;
pub mod types;

pub use api::{AnalysisOptions, OpgAnalyzer};
pub use cli::report::TextReport;
pub use error::{OpgError, Result};
pub use geometry::{Calibration, Landmark, Measurements, REFERENCE_WIDTH_MM};
pub use parsing::{parse_filename, parse_labels, FileMetadata};
pub use store::{write_csv, JsonStore, RecordStore};
pub use types::*;
