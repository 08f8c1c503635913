/// Standardized physical width spanned by an OPG radiograph, in mm
pub const REFERENCE_WIDTH_MM: f64 = 270.0;

/// Pixel-to-millimeter conversion for one image
///
/// Derived once per image from the pixel width and the known physical
/// span of the radiograph type. The optional magnification correction
/// is a deployment-level decision for imaging protocols that enlarge
/// anatomical structures by a known constant ratio; it is never chosen
/// per image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    mm_per_pixel: f64,
}

impl Calibration {
    /// Derives the scale factor from the image width in pixels
    ///
    /// Precondition: `width > 0` (a zero width is a caller bug, not a
    /// data-dependent failure).
    pub fn from_image_width(width: u32) -> Self {
        debug_assert!(width > 0, "image width must be positive");
        Self {
            mm_per_pixel: REFERENCE_WIDTH_MM / width as f64,
        }
    }

    /// Derives the scale factor with a magnification correction divisor
    pub fn with_magnification(width: u32, factor: f64) -> Self {
        debug_assert!(factor > 0.0, "magnification factor must be positive");
        let base = Self::from_image_width(width);
        Self {
            mm_per_pixel: base.mm_per_pixel / factor,
        }
    }

    /// Millimeters represented by one pixel
    pub fn mm_per_pixel(&self) -> f64 {
        self.mm_per_pixel
    }

    /// Converts a pixel distance to millimeters
    pub fn to_mm(&self, pixels: f64) -> f64 {
        pixels * self.mm_per_pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_width() {
        let cal = Calibration::from_image_width(2700);
        assert_eq!(cal.mm_per_pixel(), 0.1);
        assert_eq!(cal.to_mm(100.0), 10.0);
    }

    #[test]
    fn test_magnification_divides_scale() {
        let plain = Calibration::from_image_width(2700);
        let corrected = Calibration::with_magnification(2700, 1.25);
        assert!((corrected.mm_per_pixel() - plain.mm_per_pixel() / 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_pure_and_deterministic() {
        assert_eq!(
            Calibration::from_image_width(1350),
            Calibration::from_image_width(1350)
        );
    }
}
