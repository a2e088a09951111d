//! Owned image containers returned by the read paths.
//!
//! Each read allocates fresh buffers and hands them to the caller inside
//! one of these structs. The caller owns them outright; nothing else keeps
//! a reference.
//!
//! - [`InterleavedImage`] - one `width * height * 4` buffer, R,G,B,A repeating
//! - [`PlanarImage`] - four `width * height` buffers
//! - [`RgbaImage`] - packed [`Rgba`] pixels
//!
//! Pixels are row-major, addressed relative to the file's data window.

use crate::format::PixelFormat;
use crate::pixel::Rgba;
use crate::rect::Extent;

/// Interleaved RGBA samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterleavedImage<T> {
    /// Samples, `width * height * 4` long.
    pub data: Vec<T>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Whether the file stored an alpha channel.
    pub has_alpha: bool,
}

impl<T: PixelFormat> InterleavedImage<T> {
    /// Image extent.
    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// RGBA components of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [T; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let base = (y * self.width + x) * 4;
        [
            self.data[base],
            self.data[base + 1],
            self.data[base + 2],
            self.data[base + 3],
        ]
    }
}

/// One buffer per channel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanarImage<T> {
    /// Red samples.
    pub r: Vec<T>,
    /// Green samples.
    pub g: Vec<T>,
    /// Blue samples.
    pub b: Vec<T>,
    /// Alpha samples.
    pub a: Vec<T>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Whether the file stored an alpha channel.
    pub has_alpha: bool,
}

impl<T: PixelFormat> PlanarImage<T> {
    /// Image extent.
    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// RGBA components of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [T; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = y * self.width + x;
        [self.r[i], self.g[i], self.b[i], self.a[i]]
    }
}

/// Packed half RGBA pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RgbaImage {
    /// Pixels, `width * height` long.
    pub pixels: Vec<Rgba>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl RgbaImage {
    /// Image extent.
    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// One scanline.
    pub fn row(&self, y: usize) -> &[Rgba] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.row(y)[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_pixel() {
        let image = InterleavedImage {
            data: (0..16).map(|i| i as f32).collect(),
            width: 2,
            height: 2,
            has_alpha: true,
        };
        assert_eq!(image.pixel(1, 1), [12.0, 13.0, 14.0, 15.0]);
        assert_eq!(image.extent(), Extent::new(2, 2));
    }

    #[test]
    fn test_planar_pixel() {
        let image = PlanarImage {
            r: vec![1.0f32, 2.0],
            g: vec![3.0, 4.0],
            b: vec![5.0, 6.0],
            a: vec![7.0, 8.0],
            width: 1,
            height: 2,
            has_alpha: false,
        };
        assert_eq!(image.pixel(0, 1), [2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_rgba_rows() {
        let image = RgbaImage {
            pixels: vec![Rgba::default(), Rgba::WHITE, Rgba::WHITE, Rgba::default()],
            width: 2,
            height: 2,
        };
        assert_eq!(image.row(1), &[Rgba::WHITE, Rgba::default()]);
        assert_eq!(image.pixel(1, 0), Rgba::WHITE);
    }

    #[test]
    #[should_panic]
    fn test_pixel_out_of_bounds() {
        let image = InterleavedImage::<f32> {
            data: vec![0.0; 4],
            width: 1,
            height: 1,
            has_alpha: true,
        };
        image.pixel(1, 0);
    }
}
