use std::fmt;

/// Jaw containing a tooth
///
/// Drives landmark orientation: image y grows downward, so a maxillary
/// cusp tip is the bottom-most polygon point and a mandibular cusp tip
/// is the top-most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Jaw {
    Maxilla,
    Mandible,
}

impl Jaw {
    /// Returns whether the cusp tip is the point of maximum pixel-y
    pub fn cusp_is_max_y(&self) -> bool {
        matches!(self, Jaw::Maxilla)
    }
}

/// The four canine teeth measured by this crate, in FDI notation
///
/// `13`/`23` are the upper right/left canines, `33`/`43` the lower
/// left/right ones. Raw annotation files encode these as class ids
/// `0..=3` in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize)]
pub enum ToothClass {
    #[serde(rename = "13")]
    UpperRight,
    #[serde(rename = "23")]
    UpperLeft,
    #[serde(rename = "33")]
    LowerLeft,
    #[serde(rename = "43")]
    LowerRight,
}

/// All tooth classes, in class-id order
pub const ALL_TEETH: [ToothClass; 4] = [
    ToothClass::UpperRight,
    ToothClass::UpperLeft,
    ToothClass::LowerLeft,
    ToothClass::LowerRight,
];

/// Fixed inter-canine pairings: (13, 23) maxillary and (33, 43) mandibular
pub const ARCH_PAIRS: [(ToothClass, ToothClass); 2] = [
    (ToothClass::UpperRight, ToothClass::UpperLeft),
    (ToothClass::LowerLeft, ToothClass::LowerRight),
];

impl ToothClass {
    /// Resolves a raw annotation class id (`0..=3`)
    ///
    /// Returns `None` for unmapped ids, which callers treat as
    /// irrelevant data in a shared annotation format.
    pub fn from_class_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(ToothClass::UpperRight),
            1 => Some(ToothClass::UpperLeft),
            2 => Some(ToothClass::LowerLeft),
            3 => Some(ToothClass::LowerRight),
            _ => None,
        }
    }

    /// Index into per-class arrays, in class-id order
    pub fn index(&self) -> usize {
        match self {
            ToothClass::UpperRight => 0,
            ToothClass::UpperLeft => 1,
            ToothClass::LowerLeft => 2,
            ToothClass::LowerRight => 3,
        }
    }

    /// FDI two-digit code
    pub fn fdi_code(&self) -> &'static str {
        match self {
            ToothClass::UpperRight => "13",
            ToothClass::UpperLeft => "23",
            ToothClass::LowerLeft => "33",
            ToothClass::LowerRight => "43",
        }
    }

    /// Jaw containing this tooth
    pub fn jaw(&self) -> Jaw {
        match self {
            ToothClass::UpperRight | ToothClass::UpperLeft => Jaw::Maxilla,
            ToothClass::LowerLeft | ToothClass::LowerRight => Jaw::Mandible,
        }
    }
}

impl fmt::Display for ToothClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fdi_code())
    }
}
