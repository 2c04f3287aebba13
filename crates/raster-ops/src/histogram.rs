//! Histogram equalization: contrast redistribution via a gray-level LUT.
//!
//! The pipeline is the classical one:
//!
//! 1. [`histogram`] - 256-bin count of rounded gray values
//! 2. [`cumulative`] - prefix-sum CDF
//! 3. [`equalization_lut`] - `round((cdf[i] - cdf_min) / (total - cdf_min) * 255)`
//!    where `cdf_min` is the first non-zero CDF entry
//! 4. [`equalize`] - LUT applied to every pixel's gray value
//!
//! A single-valued image (`total == cdf_min`) has no contrast to spread;
//! the LUT collapses to all zeros and the output is flat black rather
//! than a division by zero.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::histogram::{histogram, equalization_lut};
//!
//! let buf = PixelBuffer::filled(4, 4, [80, 80, 80]).unwrap();
//! let hist = histogram(&buf);
//! assert_eq!(hist[80], 16);
//!
//! let lut = equalization_lut(&hist);
//! assert!(lut.windows(2).all(|w| w[0] <= w[1]));
//! ```

use raster_core::{clamp_u8, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Number of gray levels / histogram bins.
pub const LEVELS: usize = 256;

/// Counts rounded gray values into a 256-bin histogram.
///
/// The bin sum equals the image's pixel count.
pub fn histogram(buf: &PixelBuffer) -> [u32; LEVELS] {
    let mut counts = [0u32; LEVELS];
    for (x, y) in buf.coords() {
        counts[clamp_u8(buf.gray(x, y)) as usize] += 1;
    }
    counts
}

/// Computes the cumulative distribution of a histogram.
///
/// The result is a monotonically non-decreasing prefix sum; its last entry
/// is the total pixel count.
pub fn cumulative(hist: &[u32; LEVELS]) -> [u32; LEVELS] {
    let mut cdf = [0u32; LEVELS];
    let mut running = 0u32;
    for (bin, &count) in hist.iter().enumerate() {
        running += count;
        cdf[bin] = running;
    }
    cdf
}

/// Builds the equalization lookup table for a histogram.
///
/// `lut[i] = round((cdf[i] - cdf_min) / (total - cdf_min) * 255)`, with
/// `cdf_min` the first non-zero CDF entry. Entries below the first
/// populated bin saturate to 0. For a single-valued histogram
/// (`total == cdf_min`) every entry is 0.
pub fn equalization_lut(hist: &[u32; LEVELS]) -> [u8; LEVELS] {
    let cdf = cumulative(hist);
    let total = cdf[LEVELS - 1];
    let cdf_min = cdf.iter().copied().find(|&v| v > 0).unwrap_or(0);

    let mut lut = [0u8; LEVELS];
    if total == cdf_min {
        // Single-valued image: nothing to spread, flat output.
        return lut;
    }
    let denom = (total - cdf_min) as f32;
    for (bin, entry) in lut.iter_mut().enumerate() {
        let num = cdf[bin] as f32 - cdf_min as f32;
        *entry = clamp_u8(num / denom * 255.0);
    }
    lut
}

/// Equalizes an image's gray histogram.
///
/// Each pixel's rounded gray value is remapped through the
/// [`equalization_lut`]; the result is written to all three color
/// channels, alpha 255.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
/// use raster_ops::histogram::equalize;
///
/// let flat = PixelBuffer::filled(4, 4, [90, 90, 90]).unwrap();
/// let out = equalize(&flat);
/// assert_eq!(out.rgba(0, 0), [0, 0, 0, 255]);
/// ```
pub fn equalize(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "equalize");

    let lut = equalization_lut(&histogram(buf));
    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        out.set_gray(x, y, lut[clamp_u8(buf.gray(x, y)) as usize]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Half-black, half-white test image.
    fn two_level(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::filled(w, h, [0, 0, 0]).unwrap();
        for y in 0..h {
            for x in 0..w / 2 {
                buf.set_gray(x, y, 255);
            }
        }
        buf
    }

    #[test]
    fn test_histogram_sums_to_pixel_count() {
        let buf = two_level(6, 4);
        let hist = histogram(&buf);
        assert_eq!(hist.iter().sum::<u32>(), 24);
        assert_eq!(hist[0], 12);
        assert_eq!(hist[255], 12);
    }

    #[test]
    fn test_cdf_monotonic() {
        let hist = histogram(&two_level(6, 4));
        let cdf = cumulative(&hist);
        assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cdf[255], 24);
    }

    #[test]
    fn test_lut_monotonic() {
        let mut buf = PixelBuffer::filled(8, 8, [0, 0, 0]).unwrap();
        for i in 0..64u32 {
            buf.set_gray(i % 8, i / 8, (i * 4 % 256) as u8);
        }
        let lut = equalization_lut(&histogram(&buf));
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_degenerate_single_valued_image_is_flat() {
        let buf = PixelBuffer::filled(5, 5, [200, 200, 200]).unwrap();
        let lut = equalization_lut(&histogram(&buf));
        assert!(lut.iter().all(|&v| v == 0));

        let out = equalize(&buf);
        for (x, y) in out.coords() {
            assert_eq!(out.rgba(x, y), [0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_two_level_image_stretches_to_full_range() {
        let buf = two_level(8, 4);
        let out = equalize(&buf);
        assert_eq!(out.rgba(0, 0)[0], 255);
        assert_eq!(out.rgba(7, 3)[0], 0);
    }

    #[test]
    fn test_equalize_idempotent_on_equalized_image() {
        let once = equalize(&two_level(8, 4));
        let twice = equalize(&once);
        for (x, y) in once.coords() {
            let a = once.rgba(x, y)[0] as i32;
            let b = twice.rgba(x, y)[0] as i32;
            assert!((a - b).abs() <= 1, "drift at ({x}, {y}): {a} vs {b}");
        }
    }
}
