//! The shared image container for all engine operations.
//!
//! [`PixelBuffer`] is an owned rectangular grid of 8-bit RGBA pixels,
//! stored row-major and interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Contract
//!
//! - `data.len() == width * height * 4`, `width > 0`, `height > 0`;
//!   enforced at construction.
//! - Operations treat their inputs as read-only and allocate a fresh
//!   output buffer; a buffer handed to an engine is never mutated.
//! - Every buffer an engine produces is fully opaque (alpha 255).
//!
//! # Usage
//!
//! ```rust
//! use raster_core::PixelBuffer;
//!
//! let buf = PixelBuffer::filled(4, 4, [200, 100, 0]).unwrap();
//! assert_eq!(buf.rgba(0, 0), [200, 100, 0, 255]);
//! assert!((buf.gray(0, 0) - 100.0).abs() < 0.001);
//! ```
//!
//! # Used By
//!
//! - `raster-ops` - every engine operation

use crate::error::{Error, Result};
use crate::pixel::mean_gray;

/// Number of interleaved channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Owned 8-bit RGBA image buffer.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
///
/// let data = vec![255u8; 2 * 2 * 4];
/// let buf = PixelBuffer::from_rgba(2, 2, data).unwrap();
/// assert_eq!(buf.dimensions(), (2, 2));
/// assert_eq!(buf.pixel_count(), 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Interleaved RGBA channel data, row-major
    data: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl PixelBuffer {
    /// Creates a buffer from existing interleaved RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero, or
    /// if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} channel values, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an opaque buffer filled with a single RGB color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelBuffer;
    ///
    /// let white = PixelBuffer::filled(8, 8, [255, 255, 255]).unwrap();
    /// assert_eq!(white.rgba(7, 7), [255, 255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * CHANNELS);
        for _ in 0..pixel_count {
            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Allocates an opaque-black buffer with this buffer's dimensions.
    ///
    /// This is how engines obtain their output buffer: the source is known
    /// valid, so the result needs no re-validation.
    pub fn blank_like(&self) -> Self {
        let pixel_count = self.pixel_count();
        let mut data = vec![0u8; pixel_count * CHANNELS];
        for px in data.chunks_exact_mut(CHANNELS) {
            px[3] = 255;
        }
        Self {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if both buffers have identical width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns a reference to the raw interleaved channel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the raw interleaved channel data.
    ///
    /// Used by engines while assembling an output buffer, e.g. to hand
    /// disjoint rows to worker threads.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the channel offset of the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the RGBA quadruple at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Returns the mean gray value at (x, y) with real division.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::filled(1, 1, [10, 20, 40]).unwrap();
    /// assert!((buf.gray(0, 0) - 23.333).abs() < 0.001);
    /// ```
    #[inline]
    pub fn gray(&self, x: u32, y: u32) -> f32 {
        let i = self.offset(x, y);
        mean_gray(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Sets the RGBA quadruple at (x, y).
    ///
    /// Used by engines while assembling an output buffer; callers treat a
    /// finished buffer as immutable.
    #[inline]
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Writes an intensity to all three color channels at (x, y), alpha 255.
    #[inline]
    pub fn set_gray(&mut self, x: u32, y: u32, value: u8) {
        self.set_rgba(x, y, [value, value, value, 255]);
    }

    /// Returns a row of pixels as a channel slice.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &self.data[start..end]
    }

    /// Iterates over all pixel coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &CHANNELS)
            .finish()
    }
}
