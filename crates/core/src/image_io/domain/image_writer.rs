use std::path::Path;

use image::ImageFormat;

use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

/// Encodes a raster to an image file.
pub trait ImageWriter: Send {
    /// Writes `raster` to `path` in `format`, or in the format implied by
    /// the path's extension when `format` is `None`.
    fn write(
        &self,
        path: &Path,
        raster: &Raster,
        format: Option<ImageFormat>,
    ) -> Result<(), EditError>;
}
