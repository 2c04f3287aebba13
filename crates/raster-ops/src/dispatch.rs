//! Single entry point routing a closed operation set to the engines.
//!
//! The surrounding application owns image lifecycle: it holds the
//! current primary and secondary images and passes them in explicitly.
//! [`Operation`] enumerates every transform this library offers, and
//! [`apply`] dispatches one call against optionally-present operands;
//! this is the boundary where "no image loaded yet" surfaces as
//! [`OpsError::MissingPrimaryImage`].
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::dispatch::{apply, Operation};
//! use raster_ops::point::PointOp;
//!
//! let a = PixelBuffer::filled(2, 2, [100, 100, 100]).unwrap();
//! let b = PixelBuffer::filled(2, 2, [50, 50, 50]).unwrap();
//!
//! let avg = apply(Operation::Point(PointOp::Average), Some(&a), Some(&b)).unwrap();
//! assert_eq!(avg.rgba(0, 0)[0], 75);
//!
//! assert!(apply(Operation::Equalize, None, None).is_err());
//! ```

use crate::edge::{prewitt, sobel};
use crate::filter::{gaussian_filter, laplacian_filter, mean_filter};
use crate::histogram::equalize;
use crate::morphology::{close, contour, dilate, erode, open};
use crate::point::{binarize, combine, grayscale, logic, LogicOp, PointOp};
use crate::rank::{
    conservative_smoothing, max_filter, median_filter, min_filter, order_filter,
};
use crate::transform::{flip_horizontal, flip_vertical};
use crate::{OpsError, OpsResult};
use raster_core::PixelBuffer;

/// The closed set of operations this library performs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Unweighted grayscale conversion.
    Grayscale,
    /// Arithmetic point operation ([`PointOp`]).
    Point(PointOp),
    /// Boolean operation over operands binarized at a threshold.
    Logic(LogicOp, u8),
    /// Binarization at a threshold.
    Threshold(u8),
    /// Histogram equalization.
    Equalize,
    /// 3x3 normalized box smoothing.
    Mean,
    /// 3x3 normalized Gaussian smoothing.
    Gaussian,
    /// Unnormalized Laplacian edge enhancement.
    Laplacian,
    /// Prewitt gradient magnitude.
    Prewitt,
    /// Sobel gradient magnitude.
    Sobel,
    /// 3x3 minimum filter.
    Min,
    /// 3x3 maximum filter.
    Max,
    /// 3x3 median filter.
    Median,
    /// 3x3 order filter selecting the given ascending rank.
    Order(usize),
    /// Conservative smoothing.
    ConservativeSmoothing,
    /// Binary dilation.
    Dilate,
    /// Binary erosion.
    Erode,
    /// Binary opening.
    Open,
    /// Binary closing.
    Close,
    /// Bright-region contour extraction.
    Contour,
    /// Top-to-bottom mirror.
    FlipVertical,
    /// Left-to-right mirror.
    FlipHorizontal,
}

/// Applies an operation to optionally-present operand images.
///
/// # Errors
///
/// - [`OpsError::MissingPrimaryImage`] - `primary` is `None`
/// - any error of the routed engine (missing operand, dimension
///   mismatch, invalid parameter)
pub fn apply(
    op: Operation,
    primary: Option<&PixelBuffer>,
    secondary: Option<&PixelBuffer>,
) -> OpsResult<PixelBuffer> {
    let primary = primary.ok_or(OpsError::MissingPrimaryImage)?;

    match op {
        Operation::Grayscale => Ok(grayscale(primary)),
        Operation::Point(point_op) => combine(primary, secondary, point_op),
        Operation::Logic(logic_op, threshold) => logic(primary, secondary, logic_op, threshold),
        Operation::Threshold(threshold) => Ok(binarize(primary, threshold)),
        Operation::Equalize => Ok(equalize(primary)),
        Operation::Mean => Ok(mean_filter(primary)),
        Operation::Gaussian => Ok(gaussian_filter(primary)),
        Operation::Laplacian => Ok(laplacian_filter(primary)),
        Operation::Prewitt => Ok(prewitt(primary)),
        Operation::Sobel => Ok(sobel(primary)),
        Operation::Min => Ok(min_filter(primary)),
        Operation::Max => Ok(max_filter(primary)),
        Operation::Median => Ok(median_filter(primary)),
        Operation::Order(rank) => Ok(order_filter(primary, rank)),
        Operation::ConservativeSmoothing => Ok(conservative_smoothing(primary)),
        Operation::Dilate => Ok(dilate(primary)),
        Operation::Erode => Ok(erode(primary)),
        Operation::Open => Ok(open(primary)),
        Operation::Close => Ok(close(primary)),
        Operation::Contour => Ok(contour(primary)),
        Operation::FlipVertical => Ok(flip_vertical(primary)),
        Operation::FlipHorizontal => Ok(flip_horizontal(primary)),
    }
}
