/// Bytes per pixel of every raster held by the editor (R, G, B, A).
pub const RGBA_CHANNELS: usize = 4;

/// Blur radius used when an edit does not name one.
pub const DEFAULT_BLUR_RADIUS: f32 = 50.0;

/// Pixelation cell size used when an edit does not name one.
pub const DEFAULT_CELL_SIZE: u32 = 50;

/// Smallest cell size that visibly pixelates; a cell of 1 would be a no-op.
pub const MIN_CELL_SIZE: u32 = 2;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
