use std::fmt;

/// A 2D point with coordinates normalized to [0, 1]
/// relative to image width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scales this point to pixel space
    pub fn to_pixels(&self, width: u32, height: u32) -> (f64, f64) {
        (self.x * width as f64, self.y * height as f64)
    }
}

/// An annotated tooth outline: an ordered sequence of normalized points
///
/// After parsing, every stored polygon has at least 4 points (a bbox
/// line expands to its 4 corners; genuine outlines carry 3 or more
/// vertex pairs, and lines with fewer are rejected upstream).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon from a flat list of normalized coordinates
    ///
    /// Returns `None` when the count is odd or below 6 numbers
    /// (fewer than 3 points is not a meaningful outline).
    pub fn from_flat(nums: &[f64]) -> Option<Self> {
        if nums.len() < 6 || nums.len() % 2 != 0 {
            return None;
        }
        let points = nums
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        Some(Self { points })
    }

    /// Expands a normalized bounding box (center-x, center-y, width,
    /// height) into its 4-corner rectangle
    ///
    /// Winding is fixed: top-left, top-right, bottom-right, bottom-left.
    pub fn from_bbox(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        let (x0, y0) = (cx - w / 2.0, cy - h / 2.0);
        let (x1, y1) = (cx + w / 2.0, cy + h / 2.0);
        Self {
            points: vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertices in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertices scaled to pixel space
    pub fn to_pixels(&self, width: u32, height: u32) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p.to_pixels(width, height))
            .collect()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polygon[{} pts]", self.points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_valid() {
        let poly = Polygon::from_flat(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.points()[1], Point::new(0.3, 0.4));
    }

    #[test]
    fn test_from_flat_rejects_odd_count() {
        assert!(Polygon::from_flat(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]).is_none());
    }

    #[test]
    fn test_from_flat_rejects_short() {
        assert!(Polygon::from_flat(&[0.1, 0.2, 0.3, 0.4]).is_none());
        assert!(Polygon::from_flat(&[]).is_none());
    }

    #[test]
    fn test_from_bbox_corners() {
        let poly = Polygon::from_bbox(0.5, 0.5, 0.2, 0.4);
        assert_eq!(poly.len(), 4);
        let pts = poly.points();
        assert_eq!(pts[0], Point::new(0.4, 0.3)); // top-left
        assert_eq!(pts[1], Point::new(0.6, 0.3)); // top-right
        assert_eq!(pts[2], Point::new(0.6, 0.7)); // bottom-right
        assert_eq!(pts[3], Point::new(0.4, 0.7)); // bottom-left
    }

    #[test]
    fn test_to_pixels() {
        let poly = Polygon::from_bbox(0.5, 0.5, 1.0, 1.0);
        let px = poly.to_pixels(200, 100);
        assert_eq!(px[0], (0.0, 0.0));
        assert_eq!(px[2], (200.0, 100.0));
    }
}
