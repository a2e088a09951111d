//! Sample element types.
//!
//! OpenEXR stores every channel with one of three element types. The
//! adapter reads and writes two of them directly ([`f32`] and [`f16`]);
//! `u32` channels can only be read back converted.
//!
//! # Types
//!
//! - [`SampleType`] - Runtime element type of a channel or slice
//! - [`PixelFormat`] - Trait for in-memory element types (f16, f32)
//!
//! # Usage
//!
//! ```rust
//! use exrio_core::format::{PixelFormat, SampleType};
//! use half::f16;
//!
//! assert_eq!(SampleType::F16.size(), 2);
//! assert_eq!(<f16 as PixelFormat>::SAMPLE_TYPE, SampleType::F16);
//! assert_eq!(f32::from_f32(0.25).to_f32(), 0.25);
//! ```

use half::f16;
use std::fmt;

/// Element type of a stored channel or of a slice describing memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleType {
    /// 16-bit half-precision float.
    F16,
    /// 32-bit single-precision float.
    #[default]
    F32,
    /// 32-bit unsigned integer (read-only, converted on load).
    U32,
}

impl SampleType {
    /// Size of one element in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::F16 => 2,
            Self::F32 | Self::U32 => 4,
        }
    }

    /// Whether this is a floating-point type.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F16 | Self::F32)
    }

    /// Short lowercase name, as OpenEXR tools print it.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F16 => "half",
            Self::F32 => "float",
            Self::U32 => "uint",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory element type a frame buffer can point at.
///
/// Implemented for [`f32`] and [`f16`]. The associated
/// [`SAMPLE_TYPE`](PixelFormat::SAMPLE_TYPE) ties the Rust type to the
/// runtime tag stored in each slice, so a buffer can be checked against
/// the frame buffer describing it.
pub trait PixelFormat: Copy + Default + PartialEq + Send + Sync + fmt::Debug + 'static {
    /// Runtime tag for this element type.
    const SAMPLE_TYPE: SampleType;

    /// Convert to f32.
    fn to_f32(self) -> f32;

    /// Convert from f32 (rounds to nearest for f16).
    fn from_f32(v: f32) -> Self;

    /// One value, used for opaque alpha.
    #[inline]
    fn one() -> Self {
        Self::from_f32(1.0)
    }
}

impl PixelFormat for f32 {
    const SAMPLE_TYPE: SampleType = SampleType::F32;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }
}

impl PixelFormat for f16 {
    const SAMPLE_TYPE: SampleType = SampleType::F16;

    #[inline]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }
}
