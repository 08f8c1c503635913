//! Measurement overlay rendering.
//!
//! Draws the computed length segments (orange) and inter-canine
//! distance segments (red) on the source radiograph. Purely a visual
//! aid: it consumes the same landmarks the measurement calculator uses
//! and never affects measurement results.

use crate::error::{OpgError, Result};
use crate::geometry::{extreme_point, peaks, Landmark};
use crate::types::LabelSet;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use std::fs;
use std::path::{Path, PathBuf};

const LENGTH_COLOR: Rgb<u8> = Rgb([255, 140, 0]);
const DISTANCE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

fn segment(canvas: &mut RgbImage, a: Landmark, b: Landmark, color: Rgb<u8>) {
    // imageproc draws 1 px segments; double up for visibility
    for dx in [0.0f32, 1.0] {
        draw_line_segment_mut(
            canvas,
            (a.x as f32 + dx, a.y as f32),
            (b.x as f32 + dx, b.y as f32),
            color,
        );
    }
}

/// Renders the measurement overlay for one image into `output_dir`
///
/// The output file keeps the input file name. Returns the path of the
/// written image.
pub fn render_overlay(
    image_path: &Path,
    labels: &LabelSet,
    output_dir: &Path,
) -> Result<PathBuf> {
    let mut canvas = image::open(image_path)?.to_rgb8();
    let (width, height) = canvas.dimensions();

    // Length segments: both vertical extremes of each outline
    for (_, polygon) in labels.iter() {
        let top = extreme_point(polygon, width, height, false);
        let bottom = extreme_point(polygon, width, height, true);
        segment(&mut canvas, top, bottom, LENGTH_COLOR);
    }

    // Distance segments: cusp tips of each fixed arch pair
    let peaks = peaks(labels, width, height);
    for pair in [(0usize, 1usize), (2, 3)] {
        if let (Some(a), Some(b)) = (peaks[pair.0], peaks[pair.1]) {
            segment(&mut canvas, a, b, DISTANCE_COLOR);
        }
    }

    fs::create_dir_all(output_dir)?;
    let file_name = image_path
        .file_name()
        .ok_or_else(|| OpgError::InvalidFilename(image_path.display().to_string()))?;
    let output_path = output_dir.join(file_name);
    canvas.save(&output_path)?;
    Ok(output_path)
}
