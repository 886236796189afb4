use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat};

use crate::image_io::domain::image_writer::ImageWriter;
use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

/// Writes a raster to an image file using the `image` crate.
///
/// Formats that cannot store alpha (JPEG) receive the RGB channels only.
/// The image is encoded in memory first, so a format the encoder rejects
/// leaves the destination untouched.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_error(path: &Path, source: ImageError) -> EditError {
    match source {
        ImageError::IoError(source) => EditError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => EditError::Encode {
            path: path.to_path_buf(),
            source,
        },
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(
        &self,
        path: &Path,
        raster: &Raster,
        format: Option<ImageFormat>,
    ) -> Result<(), EditError> {
        let format = match format {
            Some(format) => format,
            None => ImageFormat::from_path(path).map_err(|e| encode_error(path, e))?,
        };

        let img = DynamicImage::ImageRgba8(raster.to_rgba_image()?);
        let mut encoded = Cursor::new(Vec::new());
        let result = match format {
            ImageFormat::Jpeg => {
                DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut encoded, format)
            }
            _ => img.write_to(&mut encoded, format),
        };
        result.map_err(|e| encode_error(path, e))?;

        std::fs::write(path, encoded.into_inner()).map_err(|source| EditError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Encoded {:?} to {}", format, path.display());
        Ok(())
    }
}
