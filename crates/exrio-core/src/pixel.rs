//! Packed half-float RGBA pixel.
//!
//! [`Rgba`] is the library-native packed pixel of OpenEXR's RGBA interface:
//! four [`f16`] fields in R,G,B,A memory order, 8 bytes per pixel. A slice
//! of them is an interleaved half buffer.
//!
//! # Memory Layout
//!
//! `#[repr(C)]`, so the field order is the interleaved channel order used
//! by [`crate::slice::Layout::Interleaved`].

use half::f16;

/// RGBA pixel with half-float channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red
    pub r: f16,
    /// Green
    pub g: f16,
    /// Blue
    pub b: f16,
    /// Alpha
    pub a: f16,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(f16::ONE, f16::ONE, f16::ONE, f16::ONE);

    /// Creates a pixel from half components.
    #[inline]
    pub const fn new(r: f16, g: f16, b: f16, a: f16) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a pixel from f32 components, rounding to nearest half.
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(f16::from_f32(r), f16::from_f32(g), f16::from_f32(b), f16::from_f32(a))
    }

    /// Components in interleaved order.
    #[inline]
    pub const fn to_array(self) -> [f16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Components widened to f32.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 4] {
        self.to_array().map(f16::to_f32)
    }
}

impl From<[f16; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [f16; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [f16; 4] {
    #[inline]
    fn from(p: Rgba) -> Self {
        p.to_array()
    }
}
