//! # raster-core
//!
//! Core types for raster image analysis.
//!
//! This crate provides the foundation shared by the raster-rs engines:
//!
//! - [`PixelBuffer`] - Owned 8-bit RGBA image buffer
//! - [`pixel::mean_gray`] - Unweighted gray extraction
//! - [`pixel::clamp_u8`] - Saturating 8-bit conversion
//!
//! ## Design
//!
//! Every operation in the raster-rs workspace is a pure function from one
//! or two read-only [`PixelBuffer`]s to a newly allocated result. The
//! buffer carries its invariants (`width > 0`, `height > 0`,
//! `data.len() == width * height * 4`) from construction, so downstream
//! engines validate operands, not storage.
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other raster-rs crates
//! depend on it:
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (point, filter, rank, edge, morphology, transform)
//!    +-- raster-tests (integration tests)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

// Re-exports for convenience
pub use buffer::{CHANNELS, PixelBuffer};
pub use error::{Error, Result};
pub use pixel::{clamp_u8, mean_gray};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{CHANNELS, PixelBuffer};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{clamp_u8, mean_gray};
}
