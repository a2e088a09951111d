//! Error types for exrio-core operations.
//!
//! These errors describe a frame buffer that cannot be mapped onto the
//! caller's memory: zero or overflowing extents, inverted data windows,
//! buffers shorter than the strides require, or element types that do not
//! match the slices describing them.
//!
//! # Usage
//!
//! ```rust
//! use exrio_core::{Error, Extent};
//!
//! let err = Extent::validated(0, 4).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::rect`] - Extent and data window validation
//! - [`crate::slice`] - Frame buffer validation, gather/scatter
//! - `exrio-io` - Folded into open/write failures at the adapter boundary

use crate::format::SampleType;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while describing or validating a frame buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, or when the sample count
    /// would overflow `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Data window whose max corner lies before its min corner.
    #[error("invalid data window: min ({min_x}, {min_y}) max ({max_x}, {max_y})")]
    InvalidDataWindow {
        /// Left edge (inclusive)
        min_x: i32,
        /// Top edge (inclusive)
        min_y: i32,
        /// Right edge (inclusive)
        max_x: i32,
        /// Bottom edge (inclusive)
        max_y: i32,
    },

    /// A buffer is shorter than the slices addressing it require.
    #[error("plane {plane} holds {actual} samples, frame buffer needs {required}")]
    BufferTooSmall {
        /// Plane index
        plane: usize,
        /// Samples required by the strides
        required: usize,
        /// Samples supplied
        actual: usize,
    },

    /// Wrong number of planes supplied for the layout.
    #[error("expected {expected} buffer plane(s), got {actual}")]
    PlaneCountMismatch {
        /// Planes the frame buffer addresses
        expected: usize,
        /// Planes supplied
        actual: usize,
    },

    /// The element type of the buffer does not match the slice.
    #[error("channel {channel} is described as {expected}, buffer holds {actual}")]
    SampleTypeMismatch {
        /// Channel name
        channel: &'static str,
        /// Element type recorded in the slice
        expected: SampleType,
        /// Element type of the supplied buffer
        actual: SampleType,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
