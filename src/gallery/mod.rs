//! Gallery assembly.
//!
//! Combines the directory scanner, orientation resolver and layout
//! calculator into a stream of display descriptors. An external renderer
//! (the index template) consumes the stream; descriptors are plain data,
//! never markup.

pub mod scan;

use crate::config::Config;
use crate::image_proc::{BoundingBox, Rotation, fit_to_box, read_orientation};
use std::path::Path;
use thiserror::Error;

/// Gallery assembly errors
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to read image header: {0}")]
    Image(#[from] image::ImageError),
}

/// Display parameters for one gallery image.
///
/// Built fresh on every index request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Path relative to the gallery root, used as the link target
    pub href: String,
    /// Display width, already fitted to the thumbnail bounds
    pub width: u32,
    /// Display height, already fitted to the thumbnail bounds
    pub height: u32,
    /// Rotation the client should request for correct display
    pub rotation: Rotation,
}

/// Lazily assemble descriptors for every matching file under the gallery
/// root.
///
/// Files that cannot be read as images are skipped with a warning so one
/// corrupt file never takes down the whole index.
pub fn descriptors(config: &Config) -> impl Iterator<Item = ImageDescriptor> + '_ {
    let bounds = BoundingBox {
        width: config.thumb_width,
        height: config.thumb_height,
    };

    scan::scan_images(&config.gallery_root, &config.suffix).filter_map(move |path| {
        match describe(&config.gallery_root, &path, bounds) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                None
            }
        }
    })
}

/// Build the descriptor for a single file.
///
/// Reads dimensions from the image header only; the pixel data is not
/// decoded until a thumbnail is actually requested. A missing or
/// unreadable EXIF store collapses to no rotation like any other
/// metadata failure.
fn describe(root: &Path, path: &Path, bounds: BoundingBox) -> Result<ImageDescriptor, GalleryError> {
    let (width, height) = image::image_dimensions(path)?;
    let rotation = read_orientation(path).unwrap_or(Rotation::None);
    let (display_w, display_h) = fit_to_box(width, height, rotation, bounds);

    let href = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();

    Ok(ImageDescriptor {
        href,
        width: display_w,
        height: display_h,
        rotation,
    })
}
