pub mod calibration;
pub mod landmarks;
pub mod measure;

pub use calibration::{Calibration, REFERENCE_WIDTH_MM};
pub use landmarks::{extreme_point, peak_point, Landmark};
pub use measure::{inter_canine_distance, measure_all, peaks, tooth_length, Measurements};
