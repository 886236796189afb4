use crate::shared::region::Region;

/// Where an image lands inside a viewport when shown centred at the largest
/// scale that keeps its aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Placement {
    /// Viewport point to (fractional) image coordinates.
    pub fn to_image(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }
}

/// A display surface showing the current image letterboxed.
///
/// Translates a drag selection made on the surface into an image [`Region`]
/// that the editing session accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `None` when either the viewport or the image has no area.
    pub fn placement(&self, image_width: u32, image_height: u32) -> Option<Placement> {
        if self.width == 0 || self.height == 0 || image_width == 0 || image_height == 0 {
            return None;
        }
        let (vw, vh) = (f64::from(self.width), f64::from(self.height));
        let (iw, ih) = (f64::from(image_width), f64::from(image_height));
        let scale = (vw / iw).min(vh / ih);
        Some(Placement {
            scale,
            offset_x: (vw - iw * scale) / 2.0,
            offset_y: (vh - ih * scale) / 2.0,
        })
    }

    /// Maps the drag corners `start` and `end` (viewport pixels, any order)
    /// to an image region, clamped to the image.
    ///
    /// Returns `None` when the mapped rectangle is empty, e.g. a selection
    /// made entirely in the letterbox padding.
    pub fn selection_to_region(
        &self,
        start: (i32, i32),
        end: (i32, i32),
        image_width: u32,
        image_height: u32,
    ) -> Option<Region> {
        let placement = self.placement(image_width, image_height)?;
        let (iw, ih) = (i64::from(image_width), i64::from(image_height));

        let (x1, y1) = placement.to_image(
            f64::from(start.0.min(end.0)),
            f64::from(start.1.min(end.1)),
        );
        let (x2, y2) = placement.to_image(
            f64::from(start.0.max(end.0)),
            f64::from(start.1.max(end.1)),
        );

        // Truncate toward zero, then clamp: near edges stay inside, far edges may touch the border.
        let x1 = (x1 as i64).clamp(0, iw - 1);
        let y1 = (y1 as i64).clamp(0, ih - 1);
        let x2 = (x2 as i64).clamp(0, iw);
        let y2 = (y2 as i64).clamp(0, ih);

        let region = Region::new(
            x1.min(x2) as i32,
            y1.min(y2) as i32,
            x1.max(x2) as i32,
            y1.max(y2) as i32,
        );
        (!region.is_empty()).then_some(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    // ── Placement ────────────────────────────────────────────────────

    #[test]
    fn test_placement_pillarbox() {
        let p = Viewport::new(200, 100).placement(100, 100).unwrap();
        assert_relative_eq!(p.scale, 1.0);
        assert_relative_eq!(p.offset_x, 50.0);
        assert_relative_eq!(p.offset_y, 0.0);
    }

    #[test]
    fn test_placement_letterbox_downscaled() {
        let p = Viewport::new(400, 400).placement(800, 400).unwrap();
        assert_relative_eq!(p.scale, 0.5);
        assert_relative_eq!(p.offset_x, 0.0);
        assert_relative_eq!(p.offset_y, 100.0);
    }

    #[test]
    fn test_placement_maps_viewport_to_image() {
        // scale 1/3, 60px vertical padding
        let p = Viewport::new(640, 480).placement(1920, 1080).unwrap();
        let (ix, iy) = p.to_image(100.0, 160.0);
        assert_relative_eq!(ix, 300.0, epsilon = 1e-9);
        assert_relative_eq!(iy, 300.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case::empty_viewport(0, 100, 10, 10)]
    #[case::empty_image(100, 100, 0, 10)]
    fn test_placement_none_without_area(
        #[case] vw: u32,
        #[case] vh: u32,
        #[case] iw: u32,
        #[case] ih: u32,
    ) {
        assert!(Viewport::new(vw, vh).placement(iw, ih).is_none());
    }

    // ── Selection mapping ────────────────────────────────────────────

    #[test]
    fn test_selection_with_padding_offset() {
        let region = Viewport::new(200, 100)
            .selection_to_region((60, 10), (110, 60), 100, 100)
            .unwrap();
        assert_eq!(region, Region::new(10, 10, 60, 60));
    }

    #[test]
    fn test_selection_upscaled_image() {
        // scale 3, 50px horizontal padding
        let region = Viewport::new(400, 300)
            .selection_to_region((80, 30), (200, 150), 100, 100)
            .unwrap();
        assert_eq!(region, Region::new(10, 10, 50, 50));
    }

    #[test]
    fn test_selection_corners_in_any_order() {
        let viewport = Viewport::new(200, 100);
        let forward = viewport.selection_to_region((60, 10), (110, 60), 100, 100);
        let backward = viewport.selection_to_region((110, 60), (60, 10), 100, 100);
        let mixed = viewport.selection_to_region((60, 60), (110, 10), 100, 100);
        assert_eq!(forward, backward);
        assert_eq!(forward, mixed);
    }

    #[test]
    fn test_selection_past_image_is_clamped() {
        let region = Viewport::new(200, 100)
            .selection_to_region((0, -20), (400, 500), 100, 100)
            .unwrap();
        assert_eq!(region, Region::new(0, 0, 100, 100));
        assert!(region.fits_within(100, 100));
    }

    #[test]
    fn test_selection_in_padding_is_none() {
        let viewport = Viewport::new(200, 100);
        assert!(viewport
            .selection_to_region((0, 0), (40, 100), 100, 100)
            .is_none());
    }

    #[test]
    fn test_zero_area_selection_is_none() {
        let viewport = Viewport::new(200, 100);
        assert!(viewport
            .selection_to_region((70, 20), (70, 80), 100, 100)
            .is_none());
    }
}
