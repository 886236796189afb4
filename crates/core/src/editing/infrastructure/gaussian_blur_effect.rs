use crate::editing::domain::region_effect::RegionEffect;
use crate::shared::constants::RGBA_CHANNELS;
use crate::shared::edit_error::EditError;
use crate::shared::raster::Raster;

use super::gaussian::{self, GaussianKernel};

/// Isotropic Gaussian blur with standard deviation equal to the radius.
///
/// Kernels are sized per patch. σ is capped at the patch's longer side,
/// where the clamp-extended blur has already flattened the patch to
/// roughly its mean. Large radii blur a downscaled copy of the patch with
/// a proportionally smaller kernel and upscale the result, which keeps the
/// cost bounded for wide selections.
#[derive(Debug)]
pub struct GaussianBlurEffect {
    radius: f32,
}

/// Kernels chosen for one patch.
#[derive(Debug)]
struct BlurPlan {
    kernel: GaussianKernel,
    scale: usize,
    small_kernel: GaussianKernel,
}

impl GaussianBlurEffect {
    /// Fails with [`EditError::InvalidArgument`] when `radius` is negative or not finite.
    pub fn new(radius: f32) -> Result<Self, EditError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(EditError::InvalidArgument(format!(
                "blur radius cannot be negative, got {radius}"
            )));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// σ actually used on a `width` x `height` patch.
    fn effective_sigma(&self, width: usize, height: usize) -> f32 {
        self.radius.min(width.max(height) as f32)
    }

    fn plan(&self, width: usize, height: usize) -> BlurPlan {
        let sigma = self.effective_sigma(width, height);
        let kernel = GaussianKernel::new(sigma);
        let scale = kernel.downscale_factor();
        let small_kernel = GaussianKernel::new(sigma / scale as f32);
        log::debug!(
            "Gaussian blur radius={} sigma={sigma} taps={} downscale={scale}",
            self.radius,
            kernel.taps().len()
        );
        BlurPlan {
            kernel,
            scale,
            small_kernel,
        }
    }
}

impl RegionEffect for GaussianBlurEffect {
    fn apply(&self, patch: &mut Raster) -> Result<(), EditError> {
        let (rw, rh) = (patch.width() as usize, patch.height() as usize);
        let plan = self.plan(rw, rh);
        if plan.kernel.is_identity() {
            return Ok(());
        }
        let mut temp = Vec::new();

        if plan.scale <= 1 || rw < plan.scale * 2 || rh < plan.scale * 2 {
            gaussian::separable_gaussian_blur(
                patch.data_mut(),
                rw,
                rh,
                RGBA_CHANNELS,
                &plan.kernel,
                &mut temp,
            );
        } else {
            let (mut small, sw, sh) =
                gaussian::downscale(patch.data(), rw, rh, RGBA_CHANNELS, plan.scale);
            gaussian::separable_gaussian_blur(
                &mut small,
                sw,
                sh,
                RGBA_CHANNELS,
                &plan.small_kernel,
                &mut temp,
            );
            let upscaled = gaussian::upscale(&small, sw, sh, RGBA_CHANNELS, rw, rh);
            patch.data_mut().copy_from_slice(&upscaled);
        }

        Ok(())
    }
}
