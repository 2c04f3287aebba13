//! First-order edge detection via dual-kernel gradient magnitude.
//!
//! [`gradient`] convolves the gray channel with a horizontal and a
//! vertical kernel and writes `sqrt(gx^2 + gy^2)` per pixel, clamped to
//! `[0, 255]`. The named presets are:
//!
//! - [`prewitt`] - unweighted difference kernels
//! - [`sobel`] - center-weighted difference kernels
//!
//! Both share the convolution border policy: out-of-bounds neighbors are
//! omitted, so border pixels of a constant image respond non-zero while
//! the flat interior stays at zero.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::edge::sobel;
//!
//! let flat = PixelBuffer::filled(8, 8, [128, 128, 128]).unwrap();
//! let edges = sobel(&flat);
//! assert_eq!(edges.rgba(4, 4)[0], 0);
//! ```

use crate::filter::{kernel_sum_at, Kernel};
use crate::{OpsError, OpsResult};
use raster_core::{clamp_u8, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Computes the gradient magnitude image from a kernel pair.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if the kernels differ in size.
pub fn gradient(buf: &PixelBuffer, kernel_x: &Kernel, kernel_y: &Kernel) -> OpsResult<PixelBuffer> {
    trace!(
        width = buf.width(),
        height = buf.height(),
        kernel_size = kernel_x.size(),
        "gradient"
    );

    if kernel_x.size() != kernel_y.size() {
        return Err(OpsError::InvalidParameter(format!(
            "gradient kernels differ in size: {} vs {}",
            kernel_x.size(),
            kernel_y.size()
        )));
    }

    Ok(magnitude(buf, kernel_x, kernel_y))
}

/// Gradient magnitude over an already-validated kernel pair.
fn magnitude(buf: &PixelBuffer, kernel_x: &Kernel, kernel_y: &Kernel) -> PixelBuffer {
    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        let gx = kernel_sum_at(buf, kernel_x, x, y);
        let gy = kernel_sum_at(buf, kernel_y, x, y);
        out.set_gray(x, y, clamp_u8((gx * gx + gy * gy).sqrt()));
    }
    out
}

/// Prewitt edge detection.
pub fn prewitt(buf: &PixelBuffer) -> PixelBuffer {
    magnitude(buf, &Kernel::prewitt_x(), &Kernel::prewitt_y())
}

/// Sobel edge detection.
pub fn sobel(buf: &PixelBuffer) -> PixelBuffer {
    magnitude(buf, &Kernel::sobel_x(), &Kernel::sobel_y())
}
