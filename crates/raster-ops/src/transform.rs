//! Axis-flip transforms.
//!
//! Pure index permutations: no value computation, no clamping, all four
//! channels copied unchanged (these are the only operations that pass the
//! source alpha through instead of forcing 255).
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::transform::flip_horizontal;
//!
//! let mut buf = PixelBuffer::filled(2, 1, [0, 0, 0]).unwrap();
//! buf.set_gray(0, 0, 200);
//! let flipped = flip_horizontal(&buf);
//! assert_eq!(flipped.rgba(1, 0)[0], 200);
//! assert_eq!(flipped.rgba(0, 0)[0], 0);
//! ```

use raster_core::PixelBuffer;

/// Mirrors an image top-to-bottom: output row `y` is input row
/// `height - 1 - y`.
pub fn flip_vertical(buf: &PixelBuffer) -> PixelBuffer {
    let mut out = buf.blank_like();
    for y in 0..buf.height() {
        let src = buf.row(buf.height() - 1 - y);
        for x in 0..buf.width() {
            let i = x as usize * 4;
            out.set_rgba(x, y, [src[i], src[i + 1], src[i + 2], src[i + 3]]);
        }
    }
    out
}

/// Mirrors an image left-to-right: output column `x` is input column
/// `width - 1 - x`.
pub fn flip_horizontal(buf: &PixelBuffer) -> PixelBuffer {
    let mut out = buf.blank_like();
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            out.set_rgba(x, y, buf.rgba(buf.width() - 1 - x, y));
        }
    }
    out
}
