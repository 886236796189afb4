use std::io;
use std::path::Path;

use image::ImageError;

use crate::image_io::domain::image_reader::ImageReader;
use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

/// Reads image files with the `image` crate, normalising every format to RGBA8.
///
/// The format is sniffed from the file contents, falling back to the
/// extension, so a mislabelled file still decodes.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

fn io_error(path: &Path, source: io::Error) -> EditError {
    if source.kind() == io::ErrorKind::NotFound {
        EditError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        EditError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Raster, EditError> {
        if !path.exists() {
            return Err(EditError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let decoded = image::ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| io_error(path, e))?
            .decode()
            .map_err(|e| match e {
                ImageError::IoError(source) => io_error(path, source),
                source => EditError::Decode {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        Ok(Raster::from_rgba_image(decoded.to_rgba8()))
    }
}
