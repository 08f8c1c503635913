use super::calibration::Calibration;
use super::landmarks::{extreme_point, peak_point, Landmark};
use crate::types::{LabelSet, Polygon, ToothClass, ALL_TEETH, ARCH_PAIRS};

/// All measurements derived from one image/label pair
///
/// Every value is independently nullable: a missing tooth annotation
/// is the expected common case, not an error. No rounding happens at
/// this layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// Tooth lengths in mm, indexed in class-id order (13, 23, 33, 43)
    pub lengths: [Option<f64>; 4],

    /// Maxillary inter-canine distance (13-23) in mm
    pub distance_13_23: Option<f64>,

    /// Mandibular inter-canine distance (33-43) in mm
    pub distance_33_43: Option<f64>,
}

impl Measurements {
    /// Length of one tooth, if measured
    pub fn length(&self, tooth: ToothClass) -> Option<f64> {
        self.lengths[tooth.index()]
    }
}

/// Measures a tooth length in millimeters
///
/// The length is the Euclidean distance between the two vertical
/// extremes (base and cusp tip) of the outline, converted via the
/// calibration. An absent polygon yields `None`.
pub fn tooth_length(
    polygon: Option<&Polygon>,
    width: u32,
    height: u32,
    calibration: &Calibration,
) -> Option<f64> {
    let polygon = polygon?;
    let top = extreme_point(polygon, width, height, false);
    let bottom = extreme_point(polygon, width, height, true);
    Some(calibration.to_mm(top.distance(&bottom)))
}

/// Measures the distance between two cusp-tip landmarks in millimeters
///
/// `None` when either peak is unavailable (its source polygon was
/// absent); this never raises.
pub fn inter_canine_distance(
    peak_a: Option<Landmark>,
    peak_b: Option<Landmark>,
    calibration: &Calibration,
) -> Option<f64> {
    match (peak_a, peak_b) {
        (Some(a), Some(b)) => Some(calibration.to_mm(a.distance(&b))),
        _ => None,
    }
}

/// Cusp-tip landmark per tooth class, in class-id order
pub fn peaks(labels: &LabelSet, width: u32, height: u32) -> [Option<Landmark>; 4] {
    let mut out = [None; 4];
    for tooth in ALL_TEETH {
        out[tooth.index()] = labels
            .get(tooth)
            .map(|p| peak_point(p, width, height, tooth));
    }
    out
}

/// Computes the four lengths and both fixed-pairing distances
pub fn measure_all(
    labels: &LabelSet,
    width: u32,
    height: u32,
    calibration: &Calibration,
) -> Measurements {
    let mut m = Measurements::default();
    for tooth in ALL_TEETH {
        m.lengths[tooth.index()] = tooth_length(labels.get(tooth), width, height, calibration);
    }

    let peaks = peaks(labels, width, height);
    let (max_a, max_b) = ARCH_PAIRS[0];
    let (man_a, man_b) = ARCH_PAIRS[1];
    m.distance_13_23 =
        inter_canine_distance(peaks[max_a.index()], peaks[max_b.index()], calibration);
    m.distance_33_43 =
        inter_canine_distance(peaks[man_a.index()], peaks[man_b.index()], calibration);
    m
}
