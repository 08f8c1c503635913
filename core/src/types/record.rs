use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject sex code as it appears in filenames
///
/// The dataset uses the Romanian codes `B` (male) and `F` (female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    B,
    F,
}

impl Sex {
    /// Parses a single-letter sex code, case-insensitively
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "B" => Some(Sex::B),
            "F" => Some(Sex::F),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::B => write!(f, "B"),
            Sex::F => write!(f, "F"),
        }
    }
}

/// One measured OPG: subject metadata plus calibrated measurements
///
/// Created fresh per image/label pair and never mutated afterwards.
/// `title` is the unique key; a recurring title supersedes the earlier
/// record in the store. Every measurement is independently nullable —
/// partial annotations are the expected common case, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpgRecord {
    /// Unique subject title parsed from the filename
    pub title: String,

    /// Subject age in years
    pub age: Option<u32>,

    /// Subject sex, when the filename carries a code
    pub sex: Option<Sex>,

    /// Canine lengths in millimeters, FDI 13 / 23 / 33 / 43
    pub length_13: Option<f64>,
    pub length_23: Option<f64>,
    pub length_33: Option<f64>,
    pub length_43: Option<f64>,

    /// Maxillary inter-canine distance in millimeters
    pub distance_13_23: Option<f64>,

    /// Mandibular inter-canine distance in millimeters
    pub distance_33_43: Option<f64>,
}

impl OpgRecord {
    /// Returns whether any measurement was produced
    pub fn has_measurements(&self) -> bool {
        self.length_13.is_some()
            || self.length_23.is_some()
            || self.length_33.is_some()
            || self.length_43.is_some()
            || self.distance_13_23.is_some()
            || self.distance_33_43.is_some()
    }
}
