//! Order-statistic filters over a 3x3 neighborhood.
//!
//! Each output pixel is selected from the sorted gray values of its
//! window rather than computed from a weighted sum:
//!
//! - [`min_filter`] / [`max_filter`] - extremes of the sample set
//! - [`median_filter`] - middle element, classic salt-and-pepper removal
//! - [`order_filter`] - caller-chosen rank in the sorted samples
//! - [`conservative_smoothing`] - center clamped into its neighbors' range
//!
//! # Border policy
//!
//! Out-of-bounds neighbors are dropped, so the sample set shrinks from 9
//! to 6 at edges and 4 at corners (3 at corners when the center is
//! excluded). The median's "middle" index shifts with the actual sample
//! count; that is the defined behavior, not a defect.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::rank::median_filter;
//!
//! let mut buf = PixelBuffer::filled(3, 3, [255, 255, 255]).unwrap();
//! buf.set_gray(1, 1, 0); // lone dark pixel
//! let out = median_filter(&buf);
//! assert_eq!(out.rgba(1, 1)[0], 255);
//! ```

use raster_core::{clamp_u8, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Default rank for [`order_filter`] (the second-smallest sample).
pub const DEFAULT_ORDER_RANK: usize = 1;

/// Collects the in-bounds gray values of the 3x3 window centered at (x, y).
///
/// The center is included unless `skip_center` is set. Values arrive in
/// scan order; callers that need order statistics sort them.
pub(crate) fn neighborhood(buf: &PixelBuffer, x: u32, y: u32, skip_center: bool) -> Vec<f32> {
    let (width, height) = (buf.width() as i64, buf.height() as i64);
    let mut values = Vec::with_capacity(9);
    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            if skip_center && dx == 0 && dy == 0 {
                continue;
            }
            let px = x as i64 + dx;
            let py = y as i64 + dy;
            if px >= 0 && px < width && py >= 0 && py < height {
                values.push(buf.gray(px as u32, py as u32));
            }
        }
    }
    values
}

pub(crate) fn sort_ascending(values: &mut [f32]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

/// Replaces each pixel with the minimum gray of its 3x3 window.
pub fn min_filter(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "min_filter");
    select(buf, |values| {
        values.iter().copied().fold(f32::MAX, f32::min)
    })
}

/// Replaces each pixel with the maximum gray of its 3x3 window.
pub fn max_filter(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "max_filter");
    select(buf, |values| {
        values.iter().copied().fold(f32::MIN, f32::max)
    })
}

/// Replaces each pixel with the median gray of its 3x3 window.
///
/// Samples are sorted ascending and the element at `n / 2` is taken,
/// where `n` is the in-bounds sample count at that pixel.
pub fn median_filter(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "median_filter");
    select(buf, |values| {
        sort_ascending(values);
        values[values.len() / 2]
    })
}

/// Replaces each pixel with the `rank`-th smallest gray of its window.
///
/// The rank is clamped to the sample count, so a rank beyond the window
/// selects the maximum. Rank 0 is the minimum;
/// [`DEFAULT_ORDER_RANK`] selects the second-smallest.
pub fn order_filter(buf: &PixelBuffer, rank: usize) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), rank, "order_filter");
    select(buf, |values| {
        sort_ascending(values);
        values[rank.min(values.len() - 1)]
    })
}

/// Applies the shared gather-then-select loop with a full sample set.
fn select(buf: &PixelBuffer, mut pick: impl FnMut(&mut Vec<f32>) -> f32) -> PixelBuffer {
    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        let mut values = neighborhood(buf, x, y, false);
        out.set_gray(x, y, clamp_u8(pick(&mut values)));
    }
    out
}

/// Smooths outlier pixels while preserving edges.
///
/// The center is compared against the min and max of its in-bounds
/// neighbors (center excluded): below the min it is raised to the min,
/// above the max lowered to the max, otherwise left unchanged. A pixel
/// with no neighbors (a 1x1 image) is left unchanged.
pub fn conservative_smoothing(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "conservative_smoothing");

    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        let center = buf.gray(x, y);
        let neighbors = neighborhood(buf, x, y, true);
        let value = if neighbors.is_empty() {
            center
        } else {
            let min = neighbors.iter().copied().fold(f32::MAX, f32::min);
            let max = neighbors.iter().copied().fold(f32::MIN, f32::max);
            center.clamp(min, max)
        };
        out.set_gray(x, y, clamp_u8(value));
    }
    out
}
