//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Validation happens before any pixel is processed; an `Err` means no
/// partial output was produced. Arithmetic overflow is never an error;
/// it saturates into `[0, 255]`.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The primary image is absent.
    #[error("missing primary image")]
    MissingPrimaryImage,

    /// A second operand image is required but absent.
    #[error("missing second operand image")]
    MissingOperand,

    /// Two operand images have differing dimensions.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: u32,
        /// First image height
        a_height: u32,
        /// Second image width
        b_width: u32,
        /// Second image height
        b_height: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl OpsError {
    /// Creates an [`OpsError::DimensionMismatch`] from two dimension pairs.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
