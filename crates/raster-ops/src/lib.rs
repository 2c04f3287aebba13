//! # raster-ops
//!
//! Pixel-level analysis and transformation over [`raster_core::PixelBuffer`].
//!
//! Every operation is a pure, deterministic function: it reads one or two
//! immutable buffers, validates before touching any pixel, and allocates a
//! fresh output buffer. Computed intensities saturate into `[0, 255]`;
//! they never wrap and never error.
//!
//! # Modules
//!
//! - [`point`] - per-pixel arithmetic, logic, thresholding, grayscale
//! - [`histogram`] - histogram equalization
//! - [`filter`] - kernel convolution (mean, Gaussian, Laplacian)
//! - [`rank`] - order-statistic filters (min, max, median, order,
//!   conservative smoothing)
//! - [`edge`] - Prewitt and Sobel gradient magnitude
//! - [`morphology`] - binary dilate, erode, open, close, contour
//! - [`transform`] - vertical and horizontal flips
//! - [`dispatch`] - closed [`Operation`] set routed from one entry point
//! - [`parallel`] - row-parallel engine variants (feature `parallel`)
//!
//! # Border policy
//!
//! Neighborhood operations skip out-of-bounds neighbors instead of
//! padding or mirroring. Sample sets shrink near borders and normalized
//! kernel sums lose contribution there; each module documents and tests
//! the visible consequences.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::{filter::mean_filter, point::binarize, morphology::contour};
//!
//! let photo = PixelBuffer::filled(16, 16, [180, 120, 60]).unwrap();
//! let smoothed = mean_filter(&photo);
//! let mask = binarize(&smoothed, 100);
//! let outline = contour(&mask);
//! assert_eq!(outline.dimensions(), (16, 16));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod dispatch;
pub mod edge;
pub mod filter;
pub mod histogram;
pub mod morphology;
pub mod point;
pub mod rank;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use dispatch::Operation;
pub use error::{OpsError, OpsResult};
pub use filter::Kernel;
pub use point::{LogicOp, PointOp};
