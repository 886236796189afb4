use image::RgbaImage;
use ndarray::{s, ArrayView3, ArrayViewMut3};

use crate::shared::constants::RGBA_CHANNELS;
use crate::shared::edit_error::EditError;
use crate::shared::region::Region;

/// An owned RGBA8 raster: contiguous bytes in row-major order.
///
/// Conversion to `image` buffers happens at I/O and resampling boundaries
/// only; the editing layer works on this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Raster {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * RGBA_CHANNELS,
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A raster with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * RGBA_CHANNELS)
            .collect();
        Self::new(data, width, height)
    }

    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.into_raw(), width, height)
    }

    /// Copies the pixels into an `image` buffer.
    pub fn to_rgba_image(&self) -> Result<RgbaImage, EditError> {
        RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            EditError::Processing(format!(
                "raster data does not match {}x{} RGBA",
                self.width, self.height
            ))
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The RGBA value at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * RGBA_CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[idx..idx + RGBA_CHANNELS]);
        Some(px)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Raster data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Raster data length must match dimensions")
    }

    /// Copies the pixels inside `region` into a new raster.
    pub fn extract(&self, region: Region) -> Result<Raster, EditError> {
        let (t, b, l, r) = self.bounds_of(region)?;
        let data: Vec<u8> = self
            .as_ndarray()
            .slice(s![t..b, l..r, ..])
            .iter()
            .copied()
            .collect();
        Ok(Raster::new(data, region.width(), region.height()))
    }

    /// Overwrites the pixels inside `region` with `patch`.
    ///
    /// `patch` must have exactly the region's dimensions.
    pub fn paste(&mut self, region: Region, patch: &Raster) -> Result<(), EditError> {
        let (t, b, l, r) = self.bounds_of(region)?;
        if patch.dimensions() != (region.width(), region.height()) {
            return Err(EditError::Processing(format!(
                "patch is {}x{} but region {} is {}x{}",
                patch.width,
                patch.height,
                region,
                region.width(),
                region.height()
            )));
        }
        self.as_ndarray_mut()
            .slice_mut(s![t..b, l..r, ..])
            .assign(&patch.as_ndarray());
        Ok(())
    }

    fn bounds_of(&self, region: Region) -> Result<(usize, usize, usize, usize), EditError> {
        if !region.fits_within(self.width, self.height) {
            return Err(EditError::InvalidRegion {
                region,
                width: self.width,
                height: self.height,
            });
        }
        Ok((
            region.top as usize,
            region.bottom as usize,
            region.left as usize,
            region.right as usize,
        ))
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, RGBA_CHANNELS)
    }
}
