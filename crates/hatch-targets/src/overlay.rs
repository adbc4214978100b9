//! Diagnostic overlay drawing.
//!
//! Draws the outline of oriented regions into an RGB frame so a human can
//! check what the recognizer saw: surviving filtered regions in a
//! per-profile color, recognized target pairs in black. Drawing is purely
//! diagnostic; nothing in the recognition path reads an image.

use image::{Rgb, RgbImage};
use nalgebra::Point2;

use hatch_targets_core::{HatchTarget, OrientedRegion};

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

const PROFILE_COLORS: [Rgb<u8>; 3] = [RED, BLUE, GREEN];

/// Stroke half-width in pixels.
const STROKE: i64 = 1;

/// Overlay color for a profile index (cycles beyond the third profile).
#[inline]
pub fn profile_color(profile_index: usize) -> Rgb<u8> {
    PROFILE_COLORS[profile_index % PROFILE_COLORS.len()]
}

/// Draw the four edges of a region's rotated rectangle.
pub fn draw_region(image: &mut RgbImage, region: &OrientedRegion, color: Rgb<u8>) {
    let points = region.corner_points();
    for p in 0..4 {
        draw_segment(image, points[p], points[(p + 1) % 4], color);
    }
}

/// Draw both strips of a recognized target in black.
pub fn draw_target(image: &mut RgbImage, target: &HatchTarget) {
    draw_region(image, target.left(), BLACK);
    draw_region(image, target.right(), BLACK);
}

fn draw_segment(image: &mut RgbImage, a: Point2<f32>, b: Point2<f32>, color: Rgb<u8>) {
    let steps = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil() as u32;
    for step in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            step as f32 / steps as f32
        };
        let x = (a.x + t * (b.x - a.x)).round() as i64;
        let y = (a.y + t * (b.y - a.y)).round() as i64;
        put_thick_pixel(image, x, y, color);
    }
}

#[inline]
fn put_thick_pixel(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    for dy in -STROKE..=STROKE {
        for dx in -STROKE..=STROKE {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && px < image.width() as i64 && py < image.height() as i64 {
                image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
