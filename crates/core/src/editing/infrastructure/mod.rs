mod gaussian;
pub mod gaussian_blur_effect;
pub mod pixelate_effect;
