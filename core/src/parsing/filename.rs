use crate::error::{OpgError, Result};
use crate::types::Sex;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Subject metadata carried by an image filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Unique subject title (filename stem up to the annotation-tool
    /// suffix marker)
    pub title: String,

    /// Age in years (mandatory in this dataset)
    pub age: u32,

    /// Sex code, when present
    pub sex: Option<Sex>,
}

fn age_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // Locale-specific age marker: "-14-ani" or "-14-de-ani"
    REGEX.get_or_init(|| Regex::new(r"-(\d{1,3})-(?:de-)?ani").expect("Failed to compile regex"))
}

fn sex_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // Single-letter code delimited by -, _, . or a string boundary
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)(?:^|[-_])([BF])(?:[-_.]|$)").expect("Failed to compile regex")
    })
}

fn digit_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d+").expect("Failed to compile regex"))
}

/// Parses title, age and sex from an image filename
///
/// The title is the base name up to (excluding) a `.rf` annotation-tool
/// suffix when present, else the stem without extension. Age comes from
/// the `-<age>-ani` / `-<age>-de-ani` marker; when the marker is absent,
/// the last digit run of the title is used only if at least two digit
/// runs exist (a lone number is assumed to be an ID, not an age).
///
/// # Errors
///
/// Returns [`OpgError::AgeNotFound`] when no age can be determined —
/// age is mandatory, and callers are expected to skip the file and
/// continue the batch. Returns [`OpgError::InvalidFilename`] for paths
/// without a UTF-8 base name.
pub fn parse_filename(path: &Path) -> Result<FileMetadata> {
    let base = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| OpgError::InvalidFilename(path.display().to_string()))?;

    let title = match base.find(".rf") {
        Some(idx) => &base[..idx],
        None => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(base),
    };

    let age = match age_regex().captures(base) {
        Some(caps) => caps[1].parse::<u32>().ok(),
        None => fallback_age(title),
    };
    let age = age.ok_or_else(|| OpgError::AgeNotFound(base.to_string()))?;

    let sex = sex_regex()
        .captures(title)
        .and_then(|caps| Sex::from_str(&caps[1]));

    Ok(FileMetadata {
        title: title.to_string(),
        age,
        sex,
    })
}

/// Treats the last 1-3 digit run of the title as the age, but only when
/// at least two digit runs exist
fn fallback_age(title: &str) -> Option<u32> {
    let runs: Vec<&str> = digit_run_regex()
        .find_iter(title)
        .map(|m| m.as_str())
        .collect();
    if runs.len() < 2 {
        return None;
    }
    let last = runs.last()?;
    if last.len() > 3 {
        return None;
    }
    last.parse::<u32>().ok()
}
