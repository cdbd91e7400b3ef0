//! Image pipeline module.
//!
//! Provides EXIF orientation resolution, display layout calculation, and
//! the request-time rotate/resize/encode transform.

pub mod layout;
pub mod orientation;
pub mod transform;

pub use layout::{BoundingBox, fit_to_box};
pub use orientation::read_orientation;
pub use transform::{OUTPUT_CONTENT_TYPE, Rotation, TransformRequest, render_thumbnail};
