use crate::types::OpgRecord;
use std::fmt;

/// Text report formatter for one measured OPG
pub struct TextReport<'a> {
    record: &'a OpgRecord,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(record: &'a OpgRecord) -> Self {
        Self { record }
    }
}

fn fmt_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2} mm", v),
        None => "-".to_string(),
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OPG Measurements")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(f, "Title:          {}", self.record.title)?;
        writeln!(
            f,
            "Age:            {}",
            self.record
                .age
                .map(|a| a.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        )?;
        writeln!(
            f,
            "Sex:            {}",
            self.record
                .sex
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        )?;
        writeln!(f)?;
        writeln!(f, "Canine Lengths")?;
        writeln!(f, "--------------")?;
        writeln!(f, "13 (upper right): {}", fmt_mm(self.record.length_13))?;
        writeln!(f, "23 (upper left):  {}", fmt_mm(self.record.length_23))?;
        writeln!(f, "33 (lower left):  {}", fmt_mm(self.record.length_33))?;
        writeln!(f, "43 (lower right): {}", fmt_mm(self.record.length_43))?;
        writeln!(f)?;
        writeln!(f, "Inter-Canine Distances")?;
        writeln!(f, "----------------------")?;
        writeln!(f, "13-23 (maxillary):  {}", fmt_mm(self.record.distance_13_23))?;
        writeln!(f, "33-43 (mandibular): {}", fmt_mm(self.record.distance_33_43))?;

        Ok(())
    }
}
