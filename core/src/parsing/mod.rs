pub mod filename;
pub mod labels;

pub use filename::{parse_filename, FileMetadata};
pub use labels::parse as parse_labels;
