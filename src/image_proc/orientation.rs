//! EXIF orientation resolution.
//!
//! Maps the EXIF Orientation tag to a display rotation. Only the four pure
//! 90-degree rotations are corrected; the mirrored variants (2, 4, 5, 7)
//! are deliberately left alone and display as stored. This is an accepted
//! behavior of the gallery, not an oversight.

use crate::image_proc::transform::Rotation;
use exif::{In, Tag, Value};
use std::fs;
use std::io::BufReader;
use std::path::Path;

/// Read the display rotation for the image at `path`.
///
/// Returns `None` when the file has no EXIF store, no Orientation tag, a
/// mirrored or invalid code, or cannot be read at all. Callers collapse
/// `None` to [`Rotation::None`]; keeping the unresolved state explicit
/// makes the silent-default policy visible and testable.
pub fn read_orientation(path: &Path) -> Option<Rotation> {
    let file = fs::File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    rotation_from_exif(&exif)
}

/// Resolve the rotation from a parsed EXIF store
pub fn rotation_from_exif(exif: &exif::Exif) -> Option<Rotation> {
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    let code = match &field.value {
        Value::Short(values) => u32::from(*values.first()?),
        Value::Long(values) => *values.first()?,
        _ => return None,
    };
    rotation_from_code(code)
}

/// Partial mapping from EXIF orientation codes to rotations.
///
/// 3, 6 and 8 encode pure rotations; everything else is unresolved.
pub fn rotation_from_code(code: u32) -> Option<Rotation> {
    match code {
        3 => Some(Rotation::Rotate180),
        6 => Some(Rotation::Rotate270),
        8 => Some(Rotation::Rotate90),
        _ => None,
    }
}
