use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::editing::domain::region_effect::RegionEffect;
use crate::editing::infrastructure::gaussian_blur_effect::GaussianBlurEffect;
use crate::editing::infrastructure::pixelate_effect::PixelateEffect;
use crate::image_io::domain::image_reader::ImageReader;
use crate::image_io::domain::image_writer::ImageWriter;
use crate::image_io::infrastructure::image_file_reader::ImageFileReader;
use crate::image_io::infrastructure::image_file_writer::ImageFileWriter;
use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;
use crate::shared::region::Region;

/// Holds the image being edited and the snapshot it was loaded as.
///
/// Every mutating call either replaces `current` with a fully edited copy
/// or fails and leaves it untouched. `original` changes only on `open`.
///
/// There is no internal locking; share across threads behind a `Mutex`.
pub struct EditSession {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    current: Option<Raster>,
    original: Option<Raster>,
    source_path: Option<PathBuf>,
}

impl EditSession {
    pub fn new(reader: Box<dyn ImageReader>, writer: Box<dyn ImageWriter>) -> Self {
        Self {
            reader,
            writer,
            current: None,
            original: None,
            source_path: None,
        }
    }

    /// Loads `path`, replacing both the current image and the original.
    pub fn open(&mut self, path: &Path) -> Result<(), EditError> {
        let raster = self.reader.read(path)?;
        log::info!(
            "Opened {} ({}x{})",
            path.display(),
            raster.width(),
            raster.height()
        );
        self.original = Some(raster.clone());
        self.current = Some(raster);
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// An independent copy of the current image, if one is loaded.
    pub fn current(&self) -> Option<Raster> {
        self.current.clone()
    }

    /// An independent copy of the image as it was loaded.
    pub fn original(&self) -> Option<Raster> {
        self.original.clone()
    }

    /// Path of the last successfully opened file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Checks `region` against the current image's present dimensions.
    pub fn validate_region(&self, region: Region) -> Result<(), EditError> {
        let current = self.current.as_ref().ok_or(EditError::NoImage)?;
        let (width, height) = current.dimensions();
        if !region.fits_within(width, height) {
            return Err(EditError::InvalidRegion {
                region,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Gaussian-blurs `region` with standard deviation `radius`. A radius of 0 is a no-op.
    pub fn blur(&mut self, region: Region, radius: f32) -> Result<(), EditError> {
        self.validate_region(region)?;
        let effect = GaussianBlurEffect::new(radius)?;
        log::debug!("Blur {region} radius={radius}");
        self.apply_effect(region, &effect)
    }

    /// Pixelates `region` into cells of `cell_size` pixels. Cell sizes below 2 are rejected.
    pub fn pixelate(&mut self, region: Region, cell_size: u32) -> Result<(), EditError> {
        self.validate_region(region)?;
        let effect = PixelateEffect::new(cell_size)?;
        log::debug!("Pixelate {region} cell_size={cell_size}");
        self.apply_effect(region, &effect)
    }

    /// Shrinks the current image to `region`. The original is unaffected.
    pub fn crop(&mut self, region: Region) -> Result<(), EditError> {
        let current = self.current.as_ref().ok_or(EditError::NoImage)?;
        let cropped = current.extract(region)?;
        log::debug!(
            "Crop {region} -> {}x{}",
            cropped.width(),
            cropped.height()
        );
        self.current = Some(cropped);
        Ok(())
    }

    /// Discards every edit since the last `open`.
    pub fn reset_to_original(&mut self) -> Result<(), EditError> {
        let original = self.original.as_ref().ok_or(EditError::NoOriginal)?;
        self.current = Some(original.clone());
        log::debug!("Reset to original");
        Ok(())
    }

    /// Encodes the current image to `path`. The format defaults to the path's extension.
    pub fn save(&self, path: &Path, format: Option<ImageFormat>) -> Result<(), EditError> {
        let current = self.current.as_ref().ok_or(EditError::NoImage)?;
        self.writer.write(path, current, format)?;
        log::info!(
            "Saved {}x{} image to {}",
            current.width(),
            current.height(),
            path.display()
        );
        Ok(())
    }

    fn apply_effect(&mut self, region: Region, effect: &dyn RegionEffect) -> Result<(), EditError> {
        let current = self.current.as_ref().ok_or(EditError::NoImage)?;
        let mut working = current.clone();
        let mut patch = working.extract(region)?;
        effect.apply(&mut patch)?;
        working.paste(region, &patch)?;
        self.current = Some(working);
        Ok(())
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(
            Box::new(ImageFileReader::new()),
            Box::new(ImageFileWriter::new()),
        )
    }
}
