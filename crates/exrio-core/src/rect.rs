//! Image extents and data windows.
//!
//! An OpenEXR file stores its pixels inside a *data window*: the inclusive
//! rectangle `min..=max` in integer pixel coordinates. The adapter only ever
//! needs the window's [`Extent`], `max - min + 1` per axis, because buffers
//! are always addressed relative to the window's top-left corner.
//!
//! ```text
//! (min_x, min_y)
//!       ┌───────────────┐
//!       │  data window  │ height = max_y - min_y + 1
//!       └───────────────┘
//!                 (max_x, max_y)
//!        width = max_x - min_x + 1
//! ```
//!
//! # Usage
//!
//! ```rust
//! use exrio_core::{DataWindow, Extent};
//!
//! let window = DataWindow::new((-2, 0), (1, 2));
//! assert_eq!(window.extent().unwrap(), Extent::new(4, 3));
//! ```
//!
//! # Used By
//!
//! - [`crate::slice::FrameBuffer`] - stride and buffer-length arithmetic
//! - `exrio-io` - deriving width/height from a file header

use crate::channel::Channel;
use crate::error::{Error, Result};

/// Largest element size a frame buffer addresses, in bytes.
const MAX_SAMPLE_SIZE: usize = 4;

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Extent {
    /// Creates an extent without validation.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Creates an extent, rejecting zero dimensions and sizes whose RGBA
    /// byte span would overflow `usize`.
    ///
    /// Slice strides are byte counts up to `width * height * 4 * 4`, so an
    /// extent that passes here is safe for every frame buffer layout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exrio_core::Extent;
    ///
    /// assert!(Extent::validated(1, 1).is_ok());
    /// assert!(Extent::validated(3, 0).is_err());
    /// ```
    pub fn validated(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero-sized image"));
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(Channel::COUNT))
            .and_then(|n| n.checked_mul(MAX_SAMPLE_SIZE))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "byte size overflows"))?;
        Ok(Self { width, height })
    }

    /// Number of pixels.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(usize, usize)> for Extent {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

/// Inclusive pixel rectangle stored in a file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataWindow {
    /// Left edge (inclusive)
    pub min_x: i32,
    /// Top edge (inclusive)
    pub min_y: i32,
    /// Right edge (inclusive)
    pub max_x: i32,
    /// Bottom edge (inclusive)
    pub max_y: i32,
}

impl DataWindow {
    /// Creates a window from its min and max corners.
    #[inline]
    pub const fn new(min: (i32, i32), max: (i32, i32)) -> Self {
        Self {
            min_x: min.0,
            min_y: min.1,
            max_x: max.0,
            max_y: max.1,
        }
    }

    /// Creates a window from its top-left corner and size, the way
    /// headers describe a layer (position plus size).
    ///
    /// Returns an error when the far corner does not fit in `i32`.
    pub fn from_origin_size(origin: (i32, i32), extent: Extent) -> Result<Self> {
        let far = |start: i32, len: usize| -> Option<i32> {
            let len = i32::try_from(len).ok()?;
            start.checked_add(len)?.checked_sub(1)
        };
        match (far(origin.0, extent.width), far(origin.1, extent.height)) {
            (Some(max_x), Some(max_y)) => Ok(Self::new(origin, (max_x, max_y))),
            _ => Err(Error::invalid_dimensions(
                extent.width,
                extent.height,
                "data window exceeds i32 coordinates",
            )),
        }
    }

    /// Width and height, `max - min + 1` per axis.
    ///
    /// The result is [validated](Extent::validated), so it can back a
    /// frame buffer directly.
    pub fn extent(&self) -> Result<Extent> {
        let span = |min: i32, max: i32| usize::try_from(i64::from(max) - i64::from(min) + 1).ok();
        match (span(self.min_x, self.max_x), span(self.min_y, self.max_y)) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                Extent::validated(width, height)
            }
            _ => Err(Error::InvalidDataWindow {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: self.max_y,
            }),
        }
    }

    /// Scanline range covered by the window, `min_y..=max_y`.
    #[inline]
    pub fn rows(&self) -> std::ops::RangeInclusive<i32> {
        self.min_y..=self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_validated() {
        assert_eq!(Extent::validated(1, 1), Ok(Extent::new(1, 1)));
        assert!(matches!(
            Extent::validated(0, 5),
            Err(Error::InvalidDimensions { width: 0, height: 5, .. })
        ));
        assert!(Extent::validated(usize::MAX, 2).is_err());
        assert!(Extent::validated(usize::MAX / 8, 1).is_err());
        assert!(Extent::validated(1, usize::MAX / 16 + 1).is_err());
        assert!(Extent::validated(1, usize::MAX / 16).is_ok());
    }

    #[test]
    fn test_window_extent_single_pixel() {
        let window = DataWindow::new((7, -3), (7, -3));
        assert_eq!(window.extent().unwrap(), Extent::new(1, 1));
        assert_eq!(window.rows(), -3..=-3);
    }

    #[test]
    fn test_window_extent_inverted() {
        let window = DataWindow::new((4, 0), (3, 0));
        assert!(matches!(window.extent(), Err(Error::InvalidDataWindow { .. })));
    }

    #[test]
    fn test_window_extent_negative_origin() {
        let window = DataWindow::new((-3, 5), (0, 7));
        assert_eq!(window.extent().unwrap(), Extent::new(4, 3));
    }

    #[test]
    fn test_window_extent_full_i32_range() {
        let window = DataWindow::new((i32::MIN, i32::MIN), (i32::MAX, i32::MAX));
        assert!(window.extent().is_err());
    }

    #[test]
    fn test_window_from_origin_size() {
        let window = DataWindow::from_origin_size((10, 20), Extent::new(4, 2)).unwrap();
        assert_eq!(window, DataWindow::new((10, 20), (13, 21)));
        assert_eq!(window.extent().unwrap(), Extent::new(4, 2));

        assert!(DataWindow::from_origin_size((i32::MAX, 0), Extent::new(2, 1)).is_err());
    }
}
