//! Linear convolution filtering over the gray channel.
//!
//! A [`Kernel`] is a square, odd-sided weight matrix applied by
//! [`convolve`]. Named presets cover the standard filters:
//!
//! - [`Kernel::mean`] - 3x3 box, normalized low-pass
//! - [`Kernel::gaussian`] - 3x3 center-weighted smoothing, divisor 16
//! - [`Kernel::laplacian`] - unnormalized second-derivative edge enhancer
//! - [`Kernel::prewitt_x`] / [`Kernel::sobel_x`] (and `_y`) - gradient
//!   kernels consumed by [`crate::edge`]
//!
//! # Border policy
//!
//! Kernel cells whose source coordinate falls outside the image are
//! omitted from the sum (no zero padding, no mirroring). The divisor is
//! still the whole kernel's weight sum, so near borders the effective
//! contribution shrinks: a normalized smoothing filter dims the border of
//! a constant image, and derivative kernels respond non-zero there. This
//! is the defined behavior, covered by the boundary tests below.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::filter::{convolve, Kernel};
//!
//! let buf = PixelBuffer::filled(8, 8, [100, 100, 100]).unwrap();
//! let smoothed = convolve(&buf, &Kernel::mean(), true);
//! // Interior pixels are untouched by a normalized box filter
//! assert_eq!(smoothed.rgba(4, 4)[0], 100);
//! ```

use crate::{OpsError, OpsResult};
use raster_core::{clamp_u8, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Square convolution kernel with odd side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel weights, row-major.
    data: Vec<f32>,
    /// Side length (odd, >= 1).
    size: usize,
}

impl Kernel {
    /// Creates a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if `size` is even or zero,
    /// or if `data.len() != size * size`.
    pub fn new(data: Vec<f32>, size: usize) -> OpsResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(OpsError::InvalidParameter(format!(
                "kernel side length must be odd, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(OpsError::InvalidParameter(format!(
                "kernel data size {} doesn't match {size}x{size}",
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// 3x3 all-ones box kernel (apply normalized).
    pub fn mean() -> Self {
        Self {
            data: vec![1.0; 9],
            size: 3,
        }
    }

    /// 3x3 Gaussian kernel, weight sum 16 (apply normalized).
    pub fn gaussian() -> Self {
        Self {
            data: vec![
                1.0, 2.0, 1.0,
                2.0, 4.0, 2.0,
                1.0, 2.0, 1.0,
            ],
            size: 3,
        }
    }

    /// 3x3 Laplacian kernel (apply unnormalized).
    pub fn laplacian() -> Self {
        Self {
            data: vec![
                0.0, -1.0, 0.0,
                -1.0, 4.0, -1.0,
                0.0, -1.0, 0.0,
            ],
            size: 3,
        }
    }

    /// Prewitt horizontal-gradient kernel.
    pub fn prewitt_x() -> Self {
        Self {
            data: vec![
                -1.0, 0.0, 1.0,
                -1.0, 0.0, 1.0,
                -1.0, 0.0, 1.0,
            ],
            size: 3,
        }
    }

    /// Prewitt vertical-gradient kernel.
    pub fn prewitt_y() -> Self {
        Self {
            data: vec![
                1.0, 1.0, 1.0,
                0.0, 0.0, 0.0,
                -1.0, -1.0, -1.0,
            ],
            size: 3,
        }
    }

    /// Sobel horizontal-gradient kernel.
    pub fn sobel_x() -> Self {
        Self {
            data: vec![
                -1.0, 0.0, 1.0,
                -2.0, 0.0, 2.0,
                -1.0, 0.0, 1.0,
            ],
            size: 3,
        }
    }

    /// Sobel vertical-gradient kernel.
    pub fn sobel_y() -> Self {
        Self {
            data: vec![
                1.0, 2.0, 1.0,
                0.0, 0.0, 0.0,
                -1.0, -2.0, -1.0,
            ],
            size: 3,
        }
    }

    /// Returns the side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the half-width (center offset).
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Returns the sum of all weights.
    pub fn weight_sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Returns the weight at kernel row `ky`, column `kx`.
    #[inline]
    pub fn get(&self, ky: usize, kx: usize) -> f32 {
        self.data[ky * self.size + kx]
    }
}

/// Convolves the gray channel of an image with a kernel.
///
/// Out-of-bounds kernel cells are skipped. With `normalize`, the sum is
/// divided by the kernel's total weight (or 1 when that total is 0); the
/// result is clamped into `[0, 255]` and written to all three color
/// channels, alpha 255.
pub fn convolve(buf: &PixelBuffer, kernel: &Kernel, normalize: bool) -> PixelBuffer {
    trace!(
        width = buf.width(),
        height = buf.height(),
        kernel_size = kernel.size(),
        normalize,
        "convolve"
    );

    let divisor = if normalize {
        let sum = kernel.weight_sum();
        if sum == 0.0 { 1.0 } else { sum }
    } else {
        1.0
    };

    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        out.set_gray(x, y, clamp_u8(kernel_sum_at(buf, kernel, x, y) / divisor));
    }
    out
}

/// Weighted gray sum of the in-bounds kernel footprint centered at (x, y).
///
/// Shared with [`crate::edge`]; cells mapping outside the image contribute
/// nothing.
pub(crate) fn kernel_sum_at(buf: &PixelBuffer, kernel: &Kernel, x: u32, y: u32) -> f32 {
    let half = kernel.half() as i64;
    let (width, height) = (buf.width() as i64, buf.height() as i64);

    let mut sum = 0.0f32;
    for ky in 0..kernel.size() {
        for kx in 0..kernel.size() {
            let px = x as i64 + kx as i64 - half;
            let py = y as i64 + ky as i64 - half;
            if px >= 0 && px < width && py >= 0 && py < height {
                sum += buf.gray(px as u32, py as u32) * kernel.get(ky, kx);
            }
        }
    }
    sum
}

/// 3x3 normalized box smoothing.
pub fn mean_filter(buf: &PixelBuffer) -> PixelBuffer {
    convolve(buf, &Kernel::mean(), true)
}

/// 3x3 normalized Gaussian smoothing.
pub fn gaussian_filter(buf: &PixelBuffer) -> PixelBuffer {
    convolve(buf, &Kernel::gaussian(), true)
}

/// Unnormalized Laplacian edge enhancement.
///
/// Strong edges saturate at the clamp boundaries.
pub fn laplacian_filter(buf: &PixelBuffer) -> PixelBuffer {
    convolve(buf, &Kernel::laplacian(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(w: u32, h: u32, v: u8) -> PixelBuffer {
        PixelBuffer::filled(w, h, [v, v, v]).unwrap()
    }

    #[test]
    fn test_kernel_even_size_rejected() {
        let result = Kernel::new(vec![1.0; 4], 2);
        assert!(matches!(result, Err(OpsError::InvalidParameter(_))));
        assert!(Kernel::new(vec![1.0; 9], 0).is_err());
    }

    #[test]
    fn test_kernel_wrong_data_length_rejected() {
        assert!(Kernel::new(vec![1.0; 8], 3).is_err());
    }

    #[test]
    fn test_preset_weight_sums() {
        assert_eq!(Kernel::mean().weight_sum(), 9.0);
        assert_eq!(Kernel::gaussian().weight_sum(), 16.0);
        assert_eq!(Kernel::laplacian().weight_sum(), 0.0);
        assert_eq!(Kernel::sobel_x().weight_sum(), 0.0);
    }

    #[test]
    fn test_mean_preserves_interior_of_constant_image() {
        let buf = constant(8, 8, 100);
        let out = mean_filter(&buf);
        for y in 1..7 {
            for x in 1..7 {
                assert_eq!(out.rgba(x, y)[0], 100);
            }
        }
    }

    #[test]
    fn test_gaussian_preserves_interior_of_constant_image() {
        let buf = constant(8, 8, 73);
        let out = gaussian_filter(&buf);
        for y in 1..7 {
            for x in 1..7 {
                assert_eq!(out.rgba(x, y)[0], 73);
            }
        }
    }

    #[test]
    fn test_border_shrinks_normalized_sum() {
        // Corner of a constant image sees only 4 of 9 cells; divisor stays 9.
        let buf = constant(5, 5, 90);
        let out = mean_filter(&buf);
        assert_eq!(out.rgba(0, 0)[0], 40); // round(90 * 4 / 9)
        assert_eq!(out.rgba(2, 0)[0], 60); // edge: 6 of 9 cells
    }

    #[test]
    fn test_laplacian_zero_on_constant_interior() {
        let buf = constant(8, 8, 120);
        let out = laplacian_filter(&buf);
        for y in 1..7 {
            for x in 1..7 {
                assert_eq!(out.rgba(x, y)[0], 0);
            }
        }
        // Border cells lose negative weights and respond positive.
        assert_eq!(out.rgba(0, 0)[0], 240); // (4 - 2) * 120
    }

    #[test]
    fn test_laplacian_saturates_on_strong_edge() {
        let mut buf = constant(5, 5, 0);
        buf.set_gray(2, 2, 255);
        let out = laplacian_filter(&buf);
        // Center: 4 * 255 clamps to 255; neighbors go negative and clamp to 0.
        assert_eq!(out.rgba(2, 2)[0], 255);
        assert_eq!(out.rgba(1, 2)[0], 0);
    }

    #[test]
    fn test_zero_sum_kernel_uses_divisor_one() {
        let buf = constant(5, 5, 10);
        // Normalizing a zero-sum kernel must not divide by zero.
        let out = convolve(&buf, &Kernel::laplacian(), true);
        assert_eq!(out.rgba(2, 2)[0], 0);
    }

    #[test]
    fn test_identity_kernel() {
        let mut buf = constant(3, 3, 10);
        buf.set_gray(1, 1, 200);
        let identity = Kernel::new(vec![1.0], 1).unwrap();
        let out = convolve(&buf, &identity, false);
        assert_eq!(out.rgba(1, 1)[0], 200);
        assert_eq!(out.rgba(0, 0)[0], 10);
    }

    #[test]
    fn test_mean_smooths_spike() {
        let mut buf = constant(3, 3, 0);
        buf.set_gray(1, 1, 90);
        let out = mean_filter(&buf);
        assert_eq!(out.rgba(1, 1)[0], 10); // 90 / 9
    }
}
