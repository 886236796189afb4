/// Kernel taps beyond which the patch is blurred at reduced resolution.
const DOWNSCALE_TAPS: usize = 50;

/// Normalised 1D Gaussian kernel for a given standard deviation.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    taps: Vec<f32>,
    sigma: f32,
}

impl GaussianKernel {
    /// Builds a kernel covering ±3σ. `sigma <= 0` yields the single-tap identity.
    pub fn new(sigma: f32) -> Self {
        let size = kernel_size_for_sigma(sigma);
        if size == 1 {
            return Self {
                taps: vec![1.0],
                sigma: 0.0,
            };
        }
        let sigma_f64 = f64::from(sigma);
        let half = (size / 2) as f64;
        let weights: Vec<f64> = (0..size)
            .map(|i| {
                let x = i as f64 - half;
                (-x * x / (2.0 * sigma_f64 * sigma_f64)).exp()
            })
            .collect();
        let sum: f64 = weights.iter().sum();
        Self {
            taps: weights.iter().map(|&w| (w / sum) as f32).collect(),
            sigma,
        }
    }

    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn is_identity(&self) -> bool {
        self.taps.len() <= 1
    }

    /// Integer factor by which a patch is shrunk before blurring with this kernel.
    pub fn downscale_factor(&self) -> usize {
        (self.taps.len() / DOWNSCALE_TAPS).max(1)
    }
}

/// Odd kernel size spanning ±3σ; 1 for non-positive or non-finite σ.
///
/// Saturates at `usize::MAX` instead of overflowing; callers bound σ first.
pub fn kernel_size_for_sigma(sigma: f32) -> usize {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 1;
    }
    let half = (3.0 * f64::from(sigma)).ceil() as usize;
    half.saturating_mul(2).saturating_add(1)
}

/// Separable Gaussian blur over interleaved `u8` samples, reusing `temp`.
///
/// Samples beyond the buffer edge are clamped to the nearest edge sample,
/// so the blur never reads outside the buffer it is given.
pub fn separable_gaussian_blur(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &GaussianKernel,
    temp: &mut Vec<f32>,
) {
    let taps = kernel.taps();
    if kernel.is_identity() || width == 0 || height == 0 {
        return;
    }
    let half = (taps.len() / 2) as isize;
    let max_x = (width - 1) as isize;
    let max_y = (height - 1) as isize;

    temp.clear();
    temp.resize(width * height * channels, 0.0);

    // Horizontal pass: data → temp
    for y in 0..height {
        let row = &data[y * width * channels..(y + 1) * width * channels];
        for x in 0..width {
            for c in 0..channels {
                let sum: f32 = taps
                    .iter()
                    .enumerate()
                    .map(|(k, &w)| {
                        let sx = (x as isize + k as isize - half).clamp(0, max_x) as usize;
                        f32::from(row[sx * channels + c]) * w
                    })
                    .sum();
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let sum: f32 = taps
                    .iter()
                    .enumerate()
                    .map(|(k, &w)| {
                        let sy = (y as isize + k as isize - half).clamp(0, max_y) as usize;
                        temp[(sy * width + x) * channels + c] * w
                    })
                    .sum();
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Shrinks a buffer by an integer factor using area averaging.
pub fn downscale(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    scale: usize,
) -> (Vec<u8>, usize, usize) {
    let new_w = width / scale;
    let new_h = height / scale;
    let mut out = vec![0u8; new_w * new_h * channels];

    for y in 0..new_h {
        for x in 0..new_w {
            for c in 0..channels {
                let mut sum = 0u32;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (sx, sy) = (x * scale + dx, y * scale + dy);
                        sum += u32::from(data[(sy * width + sx) * channels + c]);
                    }
                }
                out[(y * new_w + x) * channels + c] = (sum / (scale * scale) as u32) as u8;
            }
        }
    }

    (out, new_w, new_h)
}

/// Enlarges a buffer to `target_w` x `target_h` with bilinear interpolation.
pub fn upscale(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; target_w * target_h * channels];
    let x_ratio = (width as f32 - 1.0) / (target_w as f32 - 1.0).max(1.0);
    let y_ratio = (height as f32 - 1.0) / (target_h as f32 - 1.0).max(1.0);

    for y in 0..target_h {
        let src_y = y as f32 * y_ratio;
        let y0 = (src_y.floor() as usize).min(height - 1);
        let y1 = (y0 + 1).min(height - 1);
        let fy = src_y - y0 as f32;

        for x in 0..target_w {
            let src_x = x as f32 * x_ratio;
            let x0 = (src_x.floor() as usize).min(width - 1);
            let x1 = (x0 + 1).min(width - 1);
            let fx = src_x - x0 as f32;

            for c in 0..channels {
                let at = |px: usize, py: usize| f32::from(data[(py * width + px) * channels + c]);
                let val = at(x0, y0) * (1.0 - fx) * (1.0 - fy)
                    + at(x1, y0) * fx * (1.0 - fy)
                    + at(x0, y1) * (1.0 - fx) * fy
                    + at(x1, y1) * fx * fy;
                out[(y * target_w + x) * channels + c] = val.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}
