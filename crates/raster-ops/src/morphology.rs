//! Binary morphology with a full 3x3 structuring element.
//!
//! Every public operation binarizes its input at
//! [`DEFAULT_THRESHOLD`](crate::point::DEFAULT_THRESHOLD) before
//! operating, then works purely on {0, 255} values:
//!
//! - [`dilate`] - grow bright regions
//! - [`erode`] - shrink bright regions
//! - [`open`] - erode then dilate, removes small bright noise
//! - [`close`] - dilate then erode, fills small dark gaps
//! - [`contour`] - binarized source minus its erosion, boundary pixels only
//!
//! Dilation treats out-of-bounds neighbors as absent; erosion requires
//! the *whole* structuring element in-bounds and white, so bright regions
//! touching the border always erode away there.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::morphology::dilate;
//!
//! let mut buf = PixelBuffer::filled(5, 5, [0, 0, 0]).unwrap();
//! buf.set_gray(2, 2, 255);
//! let grown = dilate(&buf);
//! assert_eq!(grown.rgba(1, 1)[0], 255);
//! assert_eq!(grown.rgba(0, 0)[0], 0);
//! ```

use crate::point::{binarize, DEFAULT_THRESHOLD};
use raster_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Structuring element: the full 3x3 neighborhood, center included.
pub const STRUCTURING_ELEMENT: [(i32, i32); 9] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 0), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Dilates the binarized image: any covered white neighbor turns the
/// output pixel white.
pub fn dilate(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "dilate");
    dilate_binary(&binarize(buf, DEFAULT_THRESHOLD))
}

/// Erodes the binarized image: the output pixel stays white only when
/// every structuring-element cell is in-bounds and white.
pub fn erode(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "erode");
    erode_binary(&binarize(buf, DEFAULT_THRESHOLD))
}

/// Morphological opening: erosion followed by dilation.
///
/// The dilation consumes the erosion's output buffer directly.
pub fn open(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "open");
    let eroded = erode_binary(&binarize(buf, DEFAULT_THRESHOLD));
    dilate_binary(&eroded)
}

/// Morphological closing: dilation followed by erosion.
///
/// The erosion consumes the dilation's output buffer directly.
pub fn close(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "close");
    let dilated = dilate_binary(&binarize(buf, DEFAULT_THRESHOLD));
    erode_binary(&dilated)
}

/// Extracts bright-region boundaries: binarized source minus its erosion,
/// saturating at 0.
pub fn contour(buf: &PixelBuffer) -> PixelBuffer {
    trace!(width = buf.width(), height = buf.height(), "contour");

    let bin = binarize(buf, DEFAULT_THRESHOLD);
    let eroded = erode_binary(&bin);

    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        let diff = bin.rgba(x, y)[0].saturating_sub(eroded.rgba(x, y)[0]);
        out.set_gray(x, y, diff);
    }
    out
}

/// Dilation over an already-binary buffer.
fn dilate_binary(bin: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (bin.width() as i32, bin.height() as i32);
    let mut out = bin.blank_like();
    for (x, y) in bin.coords() {
        let mut value = 0;
        for (dy, dx) in STRUCTURING_ELEMENT {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx >= 0 && ny >= 0 && nx < width && ny < height
                && bin.rgba(nx as u32, ny as u32)[0] == 255
            {
                value = 255;
                break;
            }
        }
        out.set_gray(x, y, value);
    }
    out
}

/// Erosion over an already-binary buffer.
fn erode_binary(bin: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (bin.width() as i32, bin.height() as i32);
    let mut out = bin.blank_like();
    for (x, y) in bin.coords() {
        let mut all_match = true;
        for (dy, dx) in STRUCTURING_ELEMENT {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= width || ny >= height
                || bin.rgba(nx as u32, ny as u32)[0] == 0
            {
                all_match = false;
                break;
            }
        }
        out.set_gray(x, y, if all_match { 255 } else { 0 });
    }
    out
}
