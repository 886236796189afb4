use std::path::Path;

use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

/// Decodes an image source into an RGBA raster.
///
/// Whatever the source pixel format, implementations return four 8-bit
/// channels; sources without alpha come back fully opaque.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Raster, EditError>;
}
