use crate::error::Result;
use crate::geometry::{measure_all, Calibration};
use crate::parsing::{parse_filename, parse_labels};
use crate::types::{LabelSet, OpgRecord, ToothClass};
use std::path::Path;

/// Deployment-level analysis options
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisOptions {
    /// Magnification correction divisor for imaging protocols that
    /// enlarge anatomical structures by a known constant ratio
    pub magnification: Option<f64>,
}

/// Main analyzer assembling one [`OpgRecord`] per image/label pair
///
/// The caller performs all I/O (reading the label text, probing image
/// dimensions) and hands the results in as plain data; the analyzer
/// itself is pure.
///
/// # Example
///
/// ```
/// use opgmetrics_core::OpgAnalyzer;
/// use std::path::Path;
///
/// let label_text = "\
/// 0 0.30 0.20 0.35 0.20 0.325 0.40
/// 1 0.60 0.20 0.65 0.20 0.625 0.40
/// ";
///
/// let record = OpgAnalyzer::analyze(
///     Path::new("0001-14-ani-B.rf.jpg"),
///     label_text,
///     2700,
///     1400,
/// )
/// .unwrap();
///
/// assert_eq!(record.title, "0001-14-ani-B");
/// assert_eq!(record.age, Some(14));
/// assert!(record.length_13.is_some());
/// assert!(record.distance_13_23.is_some());
/// assert!(record.length_33.is_none());
/// ```
pub struct OpgAnalyzer;

impl OpgAnalyzer {
    /// Analyzes one image/label pair with default options
    ///
    /// # Errors
    ///
    /// Returns an error when the filename carries no determinable age
    /// (a mandatory field; callers skip the file and continue).
    pub fn analyze(
        image_path: &Path,
        label_text: &str,
        width: u32,
        height: u32,
    ) -> Result<OpgRecord> {
        Self::analyze_with_options(image_path, label_text, width, height, &AnalysisOptions::default())
    }

    /// Analyzes one image/label pair
    pub fn analyze_with_options(
        image_path: &Path,
        label_text: &str,
        width: u32,
        height: u32,
        options: &AnalysisOptions,
    ) -> Result<OpgRecord> {
        let metadata = parse_filename(image_path)?;
        let labels = parse_labels(label_text);
        let calibration = Self::calibration(width, options);
        let m = measure_all(&labels, width, height, &calibration);

        Ok(OpgRecord {
            title: metadata.title,
            age: Some(metadata.age),
            sex: metadata.sex,
            length_13: m.length(ToothClass::UpperRight),
            length_23: m.length(ToothClass::UpperLeft),
            length_33: m.length(ToothClass::LowerLeft),
            length_43: m.length(ToothClass::LowerRight),
            distance_13_23: m.distance_13_23,
            distance_33_43: m.distance_33_43,
        })
    }

    /// Parses the label text alone, for consumers that need the raw
    /// polygons (e.g. overlay rendering)
    pub fn parse_labels(label_text: &str) -> LabelSet {
        parse_labels(label_text)
    }

    /// Resolves the calibration for an image under the given options
    pub fn calibration(width: u32, options: &AnalysisOptions) -> Calibration {
        match options.magnification {
            Some(factor) => Calibration::with_magnification(width, factor),
            None => Calibration::from_image_width(width),
        }
    }
}
