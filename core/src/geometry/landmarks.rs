use crate::types::{Polygon, ToothClass};

/// Tolerance band around the extreme y value, in pixels
///
/// Absorbs flat polygon edges and bbox corner pairs that would
/// otherwise bias a single-point selection.
const EXTREME_BAND_PX: f64 = 1.0;

/// A derived pixel-space landmark (cusp tip or base)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    /// Euclidean distance to another landmark, in pixels
    pub fn distance(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Extracts the vertical extreme of a polygon in pixel space
///
/// Scales normalized points by the image dimensions, finds the extreme
/// pixel-y (maximum when `want_max`, else minimum), and selects every
/// point within [`EXTREME_BAND_PX`] of it. The representative x is the
/// mean x over the banded points; the representative y is the exact
/// extreme value, so the landmark always lies on the extreme boundary.
pub fn extreme_point(polygon: &Polygon, width: u32, height: u32, want_max: bool) -> Landmark {
    let pixels = polygon.to_pixels(width, height);
    debug_assert!(!pixels.is_empty(), "polygon must have points");

    let target = pixels
        .iter()
        .map(|&(_, y)| y)
        .fold(if want_max { f64::NEG_INFINITY } else { f64::INFINITY }, |acc, y| {
            if want_max {
                acc.max(y)
            } else {
                acc.min(y)
            }
        });

    let banded: Vec<f64> = pixels
        .iter()
        .filter(|&&(_, y)| {
            if want_max {
                y >= target - EXTREME_BAND_PX
            } else {
                y <= target + EXTREME_BAND_PX
            }
        })
        .map(|&(x, _)| x)
        .collect();

    // The extreme point always satisfies its own band; this fallback
    // only guards against floating point surprises.
    if banded.is_empty() {
        let &(x, _) = pixels
            .iter()
            .find(|&&(_, y)| y == target)
            .unwrap_or(&pixels[0]);
        return Landmark { x, y: target };
    }

    let x = banded.iter().sum::<f64>() / banded.len() as f64;
    Landmark { x, y: target }
}

/// Extracts the anatomically relevant extreme (cusp tip) of a tooth
///
/// Image y grows downward, so maxillary cusps (13, 23) point toward
/// maximum y and mandibular cusps (33, 43) toward minimum y. Getting
/// the orientation backward silently yields a base point instead of a
/// cusp, which is why callers go through the tooth class here instead
/// of passing a bare flag.
pub fn peak_point(polygon: &Polygon, width: u32, height: u32, tooth: ToothClass) -> Landmark {
    extreme_point(polygon, width, height, tooth.jaw().cusp_is_max_y())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(flat: &[f64]) -> Polygon {
        Polygon::from_flat(flat).unwrap()
    }

    #[test]
    fn test_extreme_point_single_vertex_at_extreme() {
        // Triangle: apex at the bottom, clear of the band
        let p = poly(&[0.2, 0.1, 0.8, 0.1, 0.5, 0.9]);
        let tip = extreme_point(&p, 100, 100, true);
        assert_eq!(tip.x, 50.0);
        assert_eq!(tip.y, 90.0);
    }

    #[test]
    fn test_tied_extremes_average_x() {
        // Two points share the exact extreme y: x must be their mean
        let p = poly(&[0.2, 0.9, 0.8, 0.9, 0.5, 0.1]);
        let tip = extreme_point(&p, 100, 100, true);
        assert_eq!(tip.x, 50.0);
        assert_eq!(tip.y, 90.0);
    }

    #[test]
    fn test_band_absorbs_near_extreme_points() {
        // 90.0 and 89.5 px fall in the 1 px band, 80.0 px does not
        let p = poly(&[0.2, 0.9, 0.6, 0.895, 0.5, 0.8]);
        let tip = extreme_point(&p, 100, 100, true);
        assert!((tip.x - 40.0).abs() < 1e-9);
        assert_eq!(tip.y, 90.0);
    }

    #[test]
    fn test_min_extreme() {
        let p = poly(&[0.2, 0.9, 0.8, 0.9, 0.5, 0.1]);
        let base = extreme_point(&p, 100, 100, false);
        assert_eq!(base.x, 50.0);
        assert_eq!(base.y, 10.0);
    }

    #[test]
    fn test_bbox_rectangle_extremes_are_edge_centers() {
        let p = Polygon::from_bbox(0.5, 0.5, 0.2, 0.4);
        let top = extreme_point(&p, 1000, 1000, false);
        let bottom = extreme_point(&p, 1000, 1000, true);
        assert_eq!(top, Landmark { x: 500.0, y: 300.0 });
        assert_eq!(bottom, Landmark { x: 500.0, y: 700.0 });
    }

    #[test]
    fn test_peak_orientation_by_jaw() {
        let p = poly(&[0.2, 0.1, 0.8, 0.1, 0.5, 0.9]);
        // Maxillary: bottom-most point
        let maxillary = peak_point(&p, 100, 100, ToothClass::UpperRight);
        assert_eq!(maxillary.y, 90.0);
        // Mandibular: top-most point
        let mandibular = peak_point(&p, 100, 100, ToothClass::LowerRight);
        assert_eq!(mandibular.y, 10.0);
    }

    #[test]
    fn test_landmark_distance() {
        let a = Landmark { x: 0.0, y: 0.0 };
        let b = Landmark { x: 3.0, y: 4.0 };
        assert_eq!(a.distance(&b), 5.0);
    }
}
