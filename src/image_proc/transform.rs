//! Image transformation operations.
//!
//! The request-time pipeline: rotate the pixel buffer, shrink it to fit a
//! bounding box, and encode the result as JPEG.

use image::{DynamicImage, GenericImageView, ImageFormat, imageops::FilterType};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Content type of every encoded thumbnail
pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// Rotation angle in counter-clockwise degrees.
///
/// This is the convention the gallery links encode: a link carrying `r=270`
/// asks for a 270-degree counter-clockwise turn (90 degrees clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// Angle in degrees, as embedded in gallery links
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    /// Whether this rotation turns the width axis into the height axis
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

impl From<u16> for Rotation {
    fn from(degrees: u16) -> Self {
        match degrees {
            90 => Rotation::Rotate90,
            180 => Rotation::Rotate180,
            270 => Rotation::Rotate270,
            _ => Rotation::None,
        }
    }
}

/// Transform errors
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Parameters of a thumbnail request
#[derive(Debug, Clone, Copy)]
pub struct TransformRequest {
    /// Maximum output width
    pub width: u32,
    /// Maximum output height
    pub height: u32,
    /// Rotation to apply before resizing
    pub rotation: Rotation,
}

/// Render a thumbnail for the image at `path`
///
/// Pipeline:
/// 1. Decode the source image
/// 2. Rotate the pixel buffer
/// 3. Shrink to fit within (width, height), preserving aspect ratio
/// 4. Encode as JPEG
///
/// The resize step only ever shrinks; a source already inside the box is
/// encoded at its native size.
pub fn render_thumbnail(path: &Path, request: &TransformRequest) -> Result<Vec<u8>, TransformError> {
    let img = image::open(path)?;
    let rotated = apply_rotation(img, request.rotation);

    let (width, height) = rotated.dimensions();
    let fitted = if width > request.width || height > request.height {
        rotated.resize(request.width, request.height, FilterType::Lanczos3)
    } else {
        rotated
    };

    encode_jpeg(fitted)
}

/// Apply a counter-clockwise rotation to the pixel buffer.
///
/// `image::DynamicImage` rotations are clockwise, hence the 90/270 crossover.
fn apply_rotation(img: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => img,
        Rotation::Rotate90 => img.rotate270(),
        Rotation::Rotate180 => img.rotate180(),
        Rotation::Rotate270 => img.rotate90(),
    }
}

/// Encode as JPEG, flattening any alpha channel first
fn encode_jpeg(img: DynamicImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.into_rgb8()).write_to(&mut buf, ImageFormat::Jpeg)?;
    Ok(buf.into_inner())
}
