use std::fmt;

/// An axis-aligned rectangle in image pixel coordinates.
///
/// Half-open on the right and bottom edges. Coordinates are signed so a
/// malformed request from a caller can be carried into the error that
/// rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal span, clamped at zero for inverted regions.
    pub fn width(&self) -> u32 {
        (i64::from(self.right) - i64::from(self.left)).max(0) as u32
    }

    /// Vertical span, clamped at zero for inverted regions.
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom) - i64::from(self.top)).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// True when the region is non-empty and lies inside a `width` x `height` image:
    /// `0 <= left < right <= width` and `0 <= top < bottom <= height`.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let (w, h) = (i64::from(width), i64::from(height));
        let (l, t, r, b) = (
            i64::from(self.left),
            i64::from(self.top),
            i64::from(self.right),
            i64::from(self.bottom),
        );
        0 <= l && l < r && r <= w && 0 <= t && t < b && b <= h
    }

    /// Whether pixel `(x, y)` falls inside the region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        i64::from(self.left) <= x
            && x < i64::from(self.right)
            && i64::from(self.top) <= y
            && y < i64::from(self.bottom)
    }
}

impl From<(i32, i32, i32, i32)> for Region {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── Spans ────────────────────────────────────────────────────────

    #[test]
    fn test_width_and_height() {
        let r = Region::new(10, 20, 50, 35);
        assert_eq!(r.width(), 40);
        assert_eq!(r.height(), 15);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_inverted_region_has_zero_span() {
        let r = Region::new(50, 50, 10, 10);
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let r = Region::new(i32::MIN, i32::MIN, i32::MAX, 0);
        assert_eq!(r.width(), u32::MAX);
        assert_eq!(r.height(), 1u32 << 31);
    }

    // ── Bounds ───────────────────────────────────────────────────────

    #[rstest]
    #[case::interior(Region::new(10, 10, 50, 50))]
    #[case::full_image(Region::new(0, 0, 100, 100))]
    #[case::single_pixel(Region::new(99, 99, 100, 100))]
    #[case::top_left_pixel(Region::new(0, 0, 1, 1))]
    fn test_fits_within_accepts(#[case] r: Region) {
        assert!(r.fits_within(100, 100));
    }

    #[rstest]
    #[case::outside(Region::new(200, 200, 300, 300))]
    #[case::degenerate_width(Region::new(10, 10, 10, 50))]
    #[case::degenerate_height(Region::new(10, 10, 50, 10))]
    #[case::inverted(Region::new(50, 50, 10, 10))]
    #[case::negative_left(Region::new(-1, 0, 10, 10))]
    #[case::negative_top(Region::new(0, -1, 10, 10))]
    #[case::right_past_edge(Region::new(0, 0, 101, 10))]
    #[case::bottom_past_edge(Region::new(0, 0, 10, 101))]
    fn test_fits_within_rejects(#[case] r: Region) {
        assert!(!r.fits_within(100, 100));
    }

    #[test]
    fn test_nothing_fits_empty_image() {
        assert!(!Region::new(0, 0, 1, 1).fits_within(0, 0));
    }

    // ── Containment ──────────────────────────────────────────────────

    #[test]
    fn test_contains_is_half_open() {
        let r = Region::new(10, 10, 20, 20);
        assert!(r.contains(10, 10));
        assert!(r.contains(19, 19));
        assert!(!r.contains(20, 10));
        assert!(!r.contains(10, 20));
        assert!(!r.contains(9, 15));
    }

    // ── Conversions ──────────────────────────────────────────────────

    #[test]
    fn test_from_tuple() {
        assert_eq!(Region::from((1, 2, 3, 4)), Region::new(1, 2, 3, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::new(10, 10, 50, 50).to_string(), "(10, 10, 50, 50)");
    }
}
