//! Point operations: per-pixel arithmetic, logic, and thresholding.
//!
//! Every operation here looks at a single pixel position at a time,
//! never a neighborhood. The operator set is closed:
//!
//! - [`PointOp`] - arithmetic combinators dispatched by [`combine`]
//! - [`LogicOp`] - boolean combinators over binarized operands, [`logic`]
//! - [`binarize`] / [`grayscale`] - threshold and gray conversion
//!
//! # Gray proxy
//!
//! Arithmetic operands read the raw R channel as the gray value. Chained
//! operations produce buffers with equal R, G, and B, so this holds; a
//! full-color operand must be passed through [`grayscale`] first.
//!
//! # Saturation
//!
//! Results are clamped into `[0, 255]`: overflow and underflow saturate,
//! they never wrap and never error.
//!
//! # Example
//!
//! ```rust
//! use raster_core::PixelBuffer;
//! use raster_ops::point::{combine, PointOp};
//!
//! let a = PixelBuffer::filled(2, 2, [100, 100, 100]).unwrap();
//! let b = PixelBuffer::filled(2, 2, [50, 50, 50]).unwrap();
//! let sum = combine(&a, Some(&b), PointOp::Add).unwrap();
//! assert_eq!(sum.rgba(0, 0), [150, 150, 150, 255]);
//! ```

use crate::{OpsError, OpsResult};
use raster_core::{clamp_u8, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Default binarization threshold.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Arithmetic point operation over one or two gray operands.
///
/// Constant-carrying variants are unary; the rest require a second image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointOp {
    /// `a + b`
    Add,
    /// `a + c` (brightness up)
    AddConstant(f32),
    /// `a - b`
    Subtract,
    /// `a - c` (brightness down)
    SubtractConstant(f32),
    /// `a * c` (contrast scale)
    MultiplyConstant(f32),
    /// `a / c` (contrast scale; `c == 0` is rejected)
    DivideConstant(f32),
    /// `|a - b|`
    AbsDifference,
    /// `a * alpha + b * (1 - alpha)` for `alpha` in `[0, 1]`
    Blend(f32),
    /// `(a + b) / 2`
    Average,
}

impl PointOp {
    /// Returns `true` if this operation requires a second image.
    pub fn requires_operand(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::AbsDifference | Self::Blend(_) | Self::Average
        )
    }

    /// Validates the operation's parameters.
    fn validate(&self) -> OpsResult<()> {
        match *self {
            Self::DivideConstant(c) if c == 0.0 => Err(OpsError::InvalidParameter(
                "divide constant must be non-zero".into(),
            )),
            Self::Blend(alpha) if !(0.0..=1.0).contains(&alpha) => Err(
                OpsError::InvalidParameter(format!("blend alpha {alpha} outside [0, 1]")),
            ),
            _ => Ok(()),
        }
    }

    /// Computes the operation on a pair of gray values.
    #[inline]
    fn eval(&self, a: f32, b: f32) -> f32 {
        match *self {
            Self::Add => a + b,
            Self::AddConstant(c) => a + c,
            Self::Subtract => a - b,
            Self::SubtractConstant(c) => a - c,
            Self::MultiplyConstant(c) => a * c,
            Self::DivideConstant(c) => a / c,
            Self::AbsDifference => (a - b).abs(),
            Self::Blend(alpha) => a * alpha + b * (1.0 - alpha),
            Self::Average => (a + b) / 2.0,
        }
    }
}

/// Boolean operation over binarized operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    /// White where both operands are white.
    And,
    /// White where either operand is white.
    Or,
    /// White where exactly one operand is white.
    Xor,
    /// White where the (single) operand is black.
    Not,
}

impl LogicOp {
    /// Returns `true` if this operation requires a second image.
    pub fn requires_operand(&self) -> bool {
        !matches!(self, Self::Not)
    }

    #[inline]
    fn eval(&self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a && b,
            Self::Or => a || b,
            Self::Xor => a != b,
            Self::Not => !a,
        }
    }
}

/// Applies an arithmetic point operation across one or two images.
///
/// Operand `a` is the R channel of `a`; operand `b` is the R channel of
/// the second image, or 0 when the operation is unary. The clamped result
/// is written to all three color channels, alpha 255.
///
/// # Errors
///
/// - [`OpsError::MissingOperand`] - two-operand op with `b == None`
/// - [`OpsError::DimensionMismatch`] - operand sizes differ
/// - [`OpsError::InvalidParameter`] - zero divisor, blend alpha outside
///   `[0, 1]`
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
/// use raster_ops::point::{combine, PointOp};
///
/// let a = PixelBuffer::filled(2, 2, [250, 250, 250]).unwrap();
/// let brighter = combine(&a, None, PointOp::AddConstant(20.0)).unwrap();
/// // Saturates at 255 instead of wrapping
/// assert_eq!(brighter.rgba(0, 0), [255, 255, 255, 255]);
/// ```
pub fn combine(a: &PixelBuffer, b: Option<&PixelBuffer>, op: PointOp) -> OpsResult<PixelBuffer> {
    trace!(width = a.width(), height = a.height(), ?op, "combine");

    op.validate()?;
    let b = required_operand(a, b, op.requires_operand())?;

    let mut out = a.blank_like();
    for (x, y) in a.coords() {
        let av = a.rgba(x, y)[0] as f32;
        let bv = b.map_or(0.0, |img| img.rgba(x, y)[0] as f32);
        out.set_gray(x, y, clamp_u8(op.eval(av, bv)));
    }
    Ok(out)
}

/// Applies a boolean operation over operands binarized at `threshold`.
///
/// Both operands are first thresholded to {0, 255}, combined as booleans,
/// and mapped back to {0, 255}. [`LogicOp::Not`] ignores the second
/// operand.
///
/// # Errors
///
/// - [`OpsError::MissingOperand`] - binary op with `b == None`
/// - [`OpsError::DimensionMismatch`] - operand sizes differ
pub fn logic(
    a: &PixelBuffer,
    b: Option<&PixelBuffer>,
    op: LogicOp,
    threshold: u8,
) -> OpsResult<PixelBuffer> {
    trace!(width = a.width(), height = a.height(), ?op, threshold, "logic");

    let b = required_operand(a, b, op.requires_operand())?;

    let bin_a = binarize(a, threshold);
    let bin_b = b.map(|img| binarize(img, threshold));

    let mut out = a.blank_like();
    for (x, y) in a.coords() {
        let av = bin_a.rgba(x, y)[0] == 255;
        let bv = bin_b.as_ref().is_some_and(|img| img.rgba(x, y)[0] == 255);
        out.set_gray(x, y, if op.eval(av, bv) { 255 } else { 0 });
    }
    Ok(out)
}

/// Resolves the second operand, checking presence and dimensions.
fn required_operand<'a>(
    a: &PixelBuffer,
    b: Option<&'a PixelBuffer>,
    required: bool,
) -> OpsResult<Option<&'a PixelBuffer>> {
    if !required {
        return Ok(None);
    }
    let b = b.ok_or(OpsError::MissingOperand)?;
    if !a.same_dimensions(b) {
        return Err(OpsError::dimension_mismatch(a.dimensions(), b.dimensions()));
    }
    Ok(Some(b))
}

/// Thresholds an image to a binary one: `gray >= threshold` becomes white.
///
/// # Example
///
/// ```rust
/// use raster_core::PixelBuffer;
/// use raster_ops::point::{binarize, DEFAULT_THRESHOLD};
///
/// let mid = PixelBuffer::filled(1, 1, [127, 127, 127]).unwrap();
/// let bin = binarize(&mid, DEFAULT_THRESHOLD);
/// assert_eq!(bin.rgba(0, 0), [255, 255, 255, 255]);
/// ```
pub fn binarize(buf: &PixelBuffer, threshold: u8) -> PixelBuffer {
    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        let value = if buf.gray(x, y) >= threshold as f32 {
            255
        } else {
            0
        };
        out.set_gray(x, y, value);
    }
    out
}

/// Converts an image to grayscale by unweighted channel averaging.
///
/// The rounded mean of R, G, and B is written to all three color
/// channels, alpha 255.
pub fn grayscale(buf: &PixelBuffer) -> PixelBuffer {
    let mut out = buf.blank_like();
    for (x, y) in buf.coords() {
        out.set_gray(x, y, clamp_u8(buf.gray(x, y)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_buf(w: u32, h: u32, v: u8) -> PixelBuffer {
        PixelBuffer::filled(w, h, [v, v, v]).unwrap()
    }

    #[test]
    fn test_add_and_subtract_images() {
        let a = gray_buf(2, 2, 100);
        let b = gray_buf(2, 2, 50);
        assert_eq!(combine(&a, Some(&b), PointOp::Add).unwrap().rgba(0, 0)[0], 150);
        assert_eq!(combine(&a, Some(&b), PointOp::Subtract).unwrap().rgba(0, 0)[0], 50);
        assert_eq!(combine(&b, Some(&a), PointOp::Subtract).unwrap().rgba(0, 0)[0], 0);
    }

    #[test]
    fn test_abs_difference_is_symmetric() {
        let a = gray_buf(2, 2, 100);
        let b = gray_buf(2, 2, 50);
        let ab = combine(&a, Some(&b), PointOp::AbsDifference).unwrap();
        let ba = combine(&b, Some(&a), PointOp::AbsDifference).unwrap();
        assert_eq!(ab.rgba(1, 1)[0], 50);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_blend_and_average() {
        let a = gray_buf(2, 2, 100);
        let b = gray_buf(2, 2, 50);
        let blend = combine(&a, Some(&b), PointOp::Blend(0.5)).unwrap();
        let avg = combine(&a, Some(&b), PointOp::Average).unwrap();
        assert_eq!(blend.rgba(0, 0)[0], 75);
        assert_eq!(avg, blend);
    }

    #[test]
    fn test_constant_ops_saturate() {
        let bright = gray_buf(2, 2, 250);
        let dark = gray_buf(2, 2, 5);
        assert_eq!(
            combine(&bright, None, PointOp::AddConstant(10.0)).unwrap().rgba(0, 0)[0],
            255
        );
        assert_eq!(
            combine(&dark, None, PointOp::SubtractConstant(10.0)).unwrap().rgba(0, 0)[0],
            0
        );
        assert_eq!(
            combine(&bright, None, PointOp::MultiplyConstant(2.0)).unwrap().rgba(0, 0)[0],
            255
        );
    }

    #[test]
    fn test_divide_constant() {
        let a = gray_buf(2, 2, 100);
        let halved = combine(&a, None, PointOp::DivideConstant(2.0)).unwrap();
        assert_eq!(halved.rgba(0, 0)[0], 50);
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let a = gray_buf(2, 2, 100);
        let result = combine(&a, None, PointOp::DivideConstant(0.0));
        assert!(matches!(result, Err(OpsError::InvalidParameter(_))));
    }

    #[test]
    fn test_blend_alpha_out_of_range_rejected() {
        let a = gray_buf(2, 2, 100);
        let b = gray_buf(2, 2, 50);
        assert!(matches!(
            combine(&a, Some(&b), PointOp::Blend(1.5)),
            Err(OpsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_missing_operand() {
        let a = gray_buf(2, 2, 100);
        assert!(matches!(
            combine(&a, None, PointOp::Add),
            Err(OpsError::MissingOperand)
        ));
        assert!(matches!(
            logic(&a, None, LogicOp::And, DEFAULT_THRESHOLD),
            Err(OpsError::MissingOperand)
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = gray_buf(2, 2, 100);
        let b = gray_buf(3, 2, 50);
        assert!(matches!(
            combine(&a, Some(&b), PointOp::Add),
            Err(OpsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_binarize_threshold_boundary() {
        let below = gray_buf(1, 1, 126);
        let at = gray_buf(1, 1, 127);
        assert_eq!(binarize(&below, DEFAULT_THRESHOLD).rgba(0, 0)[0], 0);
        assert_eq!(binarize(&at, DEFAULT_THRESHOLD).rgba(0, 0)[0], 255);
    }

    #[test]
    fn test_logic_ops() {
        let white = gray_buf(1, 1, 255);
        let black = gray_buf(1, 1, 0);
        let t = DEFAULT_THRESHOLD;
        assert_eq!(logic(&white, Some(&black), LogicOp::And, t).unwrap().rgba(0, 0)[0], 0);
        assert_eq!(logic(&white, Some(&black), LogicOp::Or, t).unwrap().rgba(0, 0)[0], 255);
        assert_eq!(logic(&white, Some(&white), LogicOp::Xor, t).unwrap().rgba(0, 0)[0], 0);
        assert_eq!(logic(&white, Some(&black), LogicOp::Xor, t).unwrap().rgba(0, 0)[0], 255);
        assert_eq!(logic(&white, None, LogicOp::Not, t).unwrap().rgba(0, 0)[0], 0);
    }

    #[test]
    fn test_double_not_is_identity() {
        let buf = PixelBuffer::filled(3, 3, [40, 180, 220]).unwrap();
        let bin = binarize(&buf, DEFAULT_THRESHOLD);
        let double_not = logic(
            &logic(&bin, None, LogicOp::Not, DEFAULT_THRESHOLD).unwrap(),
            None,
            LogicOp::Not,
            DEFAULT_THRESHOLD,
        )
        .unwrap();
        assert_eq!(double_not, bin);
    }

    #[test]
    fn test_grayscale_rounds_mean() {
        let buf = PixelBuffer::filled(1, 1, [10, 20, 40]).unwrap();
        // (10 + 20 + 40) / 3 = 23.33 -> 23
        assert_eq!(grayscale(&buf).rgba(0, 0), [23, 23, 23, 255]);
    }
}
