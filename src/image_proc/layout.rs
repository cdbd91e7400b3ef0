//! Display layout calculation.
//!
//! Fits a post-rotation image footprint into the configured bounding box
//! while preserving aspect ratio. Pure arithmetic, no I/O.

use crate::image_proc::transform::Rotation;

/// Maximum display size for thumbnails; process-wide constant taken from
/// the configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub width: u32,
    pub height: u32,
}

/// Compute the display size for an image of `width` x `height` pixels shown
/// with `rotation`, constrained to `bounds`.
///
/// A 90 or 270 degree rotation swaps which source dimension acts as width
/// for layout purposes; the pixel buffer itself is rotated later, at
/// request time. The result never exceeds the box in either dimension and
/// never upscales a source already smaller than the box.
pub fn fit_to_box(width: u32, height: u32, rotation: Rotation, bounds: BoundingBox) -> (u32, u32) {
    let (w, h) = if rotation.swaps_axes() {
        (height, width)
    } else {
        (width, height)
    };

    let aspect = f64::from(w) / f64::from(h);
    let box_aspect = f64::from(bounds.width) / f64::from(bounds.height);

    let (display_w, display_h) = if aspect > box_aspect {
        // Relatively wider than the box: fit by width
        let display_w = f64::from(w.min(bounds.width));
        (display_w, display_w / aspect)
    } else {
        // Fit by height
        let display_h = f64::from(h.min(bounds.height));
        (display_h * aspect, display_h)
    };

    // Truncate, but keep both dimensions positive for extreme aspect ratios
    ((display_w as u32).max(1), (display_h as u32).max(1))
}
