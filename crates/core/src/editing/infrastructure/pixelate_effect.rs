use image::imageops::{self, FilterType};

use crate::editing::domain::region_effect::RegionEffect;
use crate::shared::constants::MIN_CELL_SIZE;
use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

/// Blocky pixelation: nearest-neighbour downsample by the cell size, then
/// nearest-neighbour upsample back to the patch dimensions.
#[derive(Debug)]
pub struct PixelateEffect {
    cell_size: u32,
}

impl PixelateEffect {
    /// Fails with [`EditError::InvalidArgument`] for a cell size of 0 or 1.
    pub fn new(cell_size: u32) -> Result<Self, EditError> {
        if cell_size < MIN_CELL_SIZE {
            return Err(EditError::InvalidArgument(format!(
                "pixel size must be greater than 1, got {cell_size}"
            )));
        }
        Ok(Self { cell_size })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Size of the intermediate image; never zero, even for cells larger than the patch.
    pub fn reduced_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (
            (width / self.cell_size).max(1),
            (height / self.cell_size).max(1),
        )
    }
}

impl RegionEffect for PixelateEffect {
    fn apply(&self, patch: &mut Raster) -> Result<(), EditError> {
        let (w, h) = patch.dimensions();
        let (sw, sh) = self.reduced_dimensions(w, h);
        log::debug!(
            "Pixelate {w}x{h} patch through {sw}x{sh} (cell_size={})",
            self.cell_size
        );

        let source = patch.to_rgba_image()?;
        let small = imageops::resize(&source, sw, sh, FilterType::Nearest);
        let blocky = imageops::resize(&small, w, h, FilterType::Nearest);
        if blocky.dimensions() != (w, h) {
            return Err(EditError::Processing(format!(
                "resample produced {}x{}, expected {w}x{h}",
                blocky.width(),
                blocky.height()
            )));
        }

        *patch = Raster::from_rgba_image(blocky);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gradient(width: u32, height: u32) -> Raster {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x * 5) as u8, (y * 5) as u8, 0, 255]);
            }
        }
        Raster::new(data, width, height)
    }

    fn distinct_colors(raster: &Raster) -> usize {
        let mut colors: Vec<[u8; 4]> = raster
            .data()
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        colors.sort_unstable();
        colors.dedup();
        colors.len()
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    fn test_cell_size_at_most_one_rejected(#[case] cell: u32) {
        let err = PixelateEffect::new(cell).unwrap_err();
        assert!(matches!(err, EditError::InvalidArgument(_)));
    }

    #[rstest]
    #[case::even(40, 40, 10, (4, 4))]
    #[case::remainder(45, 23, 10, (4, 2))]
    #[case::cell_larger_than_patch(8, 8, 50, (1, 1))]
    #[case::cell_larger_than_height(100, 3, 10, (10, 1))]
    fn test_reduced_dimensions(
        #[case] w: u32,
        #[case] h: u32,
        #[case] cell: u32,
        #[case] expected: (u32, u32),
    ) {
        let effect = PixelateEffect::new(cell).unwrap();
        assert_eq!(effect.reduced_dimensions(w, h), expected);
    }

    #[test]
    fn test_keeps_patch_dimensions() {
        let mut patch = gradient(45, 23);
        PixelateEffect::new(10).unwrap().apply(&mut patch).unwrap();
        assert_eq!(patch.dimensions(), (45, 23));
    }

    #[test]
    fn test_produces_blocks() {
        let mut patch = gradient(40, 40);
        PixelateEffect::new(10).unwrap().apply(&mut patch).unwrap();
        assert!(distinct_colors(&patch) <= 16);
        assert_eq!(patch.pixel(0, 0), patch.pixel(9, 9));
        assert_eq!(patch.pixel(30, 30), patch.pixel(39, 39));
    }

    #[test]
    fn test_cell_larger_than_patch_gives_single_flat_block() {
        let mut patch = gradient(40, 30);
        PixelateEffect::new(100).unwrap().apply(&mut patch).unwrap();
        assert_eq!(distinct_colors(&patch), 1);
    }

    #[test]
    fn test_uniform_patch_unchanged() {
        let mut patch = Raster::filled(20, 20, [10, 20, 30, 255]);
        PixelateEffect::new(4).unwrap().apply(&mut patch).unwrap();
        assert_eq!(patch, Raster::filled(20, 20, [10, 20, 30, 255]));
    }
}
