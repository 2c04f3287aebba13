//! Row-parallel engine variants using Rayon.
//!
//! Every pixel's output depends only on a fixed, read-only neighborhood
//! of the input, so the neighborhood engines parallelize over output
//! rows without changing a single result: these functions are
//! bit-identical to their serial counterparts and keep the all-or-nothing
//! per-call contract.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::{filter::Kernel, parallel};
//!
//! let buf = PixelBuffer::filled(64, 64, [90, 90, 90]).unwrap();
//! let smoothed = parallel::convolve(&buf, &Kernel::mean(), true);
//! assert_eq!(smoothed.rgba(32, 32)[0], 90);
//! ```

use crate::filter::{kernel_sum_at, Kernel};
use crate::rank::{neighborhood, sort_ascending};
use raster_core::{clamp_u8, PixelBuffer, CHANNELS};
use rayon::prelude::*;

/// Row-parallel counterpart of [`crate::filter::convolve`].
pub fn convolve(buf: &PixelBuffer, kernel: &Kernel, normalize: bool) -> PixelBuffer {
    let divisor = if normalize {
        let sum = kernel.weight_sum();
        if sum == 0.0 { 1.0 } else { sum }
    } else {
        1.0
    };

    let width = buf.width() as usize;
    let mut out = buf.blank_like();
    out.data_mut()
        .par_chunks_mut(width * CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let sum = kernel_sum_at(buf, kernel, x as u32, y as u32);
                write_gray(row, x, clamp_u8(sum / divisor));
            }
        });
    out
}

/// Row-parallel counterpart of [`crate::rank::median_filter`].
pub fn median_filter(buf: &PixelBuffer) -> PixelBuffer {
    let width = buf.width() as usize;
    let mut out = buf.blank_like();
    out.data_mut()
        .par_chunks_mut(width * CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut values = neighborhood(buf, x as u32, y as u32, false);
                sort_ascending(&mut values);
                write_gray(row, x, clamp_u8(values[values.len() / 2]));
            }
        });
    out
}

/// Writes an intensity into an output row slice, alpha 255.
#[inline]
fn write_gray(row: &mut [u8], x: usize, value: u8) {
    let i = x * CHANNELS;
    row[i..i + CHANNELS].copy_from_slice(&[value, value, value, 255]);
}
