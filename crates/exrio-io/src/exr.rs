//! OpenEXR read and write entry points.
//!
//! One function per pixel-buffer layout. Writers borrow the caller's
//! buffers; readers allocate new ones and return them by value.
//!
//! | Layout | write | read |
//! |---|---|---|
//! | packed [`Rgba`] (half) | [`write_rgba`] | [`read_rgba`] |
//! | interleaved f32 | [`write_interleaved_f32`] | [`read_interleaved_f32`] |
//! | planar f32 | [`write_planar_f32`] | [`read_planar_f32`] |
//! | interleaved f16 | [`write_interleaved_f16`] | [`read_interleaved_f16`] |
//! | planar f64 (as f32) | [`write_planar_f64`] | - |
//!
//! Every file is a single-part scanline image with `R`, `G`, `B` and `A`
//! channels. Readers take the first layer of the file and convert stored
//! samples to the requested element type.
//!
//! # Example
//!
//! ```rust,ignore
//! use exrio_io::exr;
//!
//! let image = exr::read_planar_f32("input.exr")?;
//! println!("Size: {}x{}", image.width, image.height);
//!
//! exr::write_planar_f32("copy.exr", &image.r, &image.g, &image.b, &image.a, image.width, image.height)?;
//! ```
//!
//! # Configuration
//!
//! The free functions write with [`ExrWriter::default()`]. Use an
//! [`ExrWriter`] to pick a codec:
//!
//! ```rust,ignore
//! use exrio_io::exr::ExrWriter;
//! use exrio_io::Compression;
//!
//! ExrWriter::new()
//!     .with_compression(Compression::Piz)
//!     .write_interleaved_f32("out.exr", &rgba, width, height)?;
//! ```

use crate::error::{IoError, IoResult};
use crate::frame::{read_frame, write_extent, write_frame};
use crate::options::{Compression, WriteOptions};
use exrio_core::{
    FrameBuffer, InterleavedImage, Layout, PixelFormat, PlanarImage, Rgba, RgbaImage,
};
use half::f16;
use std::path::Path;
use tracing::{debug, trace};

/// Writes EXR files with a fixed set of [`WriteOptions`].
#[derive(Debug, Clone, Default)]
pub struct ExrWriter {
    options: WriteOptions,
}

impl ExrWriter {
    /// Writer with default options (ZIP, no layer name).
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer with explicit options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Sets the compression codec.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.options.compression = compression;
        self
    }

    /// Sets the layer name attribute.
    pub fn with_layer_name(mut self, name: impl Into<String>) -> Self {
        self.options.layer_name = Some(name.into());
        self
    }

    /// Current options.
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Writes packed half RGBA pixels.
    pub fn write_rgba<P: AsRef<Path>>(
        &self,
        path: P,
        pixels: &[Rgba],
        width: usize,
        height: usize,
    ) -> IoResult<()> {
        let samples: Vec<f16> = pixels.iter().flat_map(|p| p.to_array()).collect();
        self.write_interleaved(path.as_ref(), &samples, width, height)
    }

    /// Writes an interleaved f32 RGBA buffer.
    pub fn write_interleaved_f32<P: AsRef<Path>>(
        &self,
        path: P,
        rgba: &[f32],
        width: usize,
        height: usize,
    ) -> IoResult<()> {
        self.write_interleaved(path.as_ref(), rgba, width, height)
    }

    /// Writes an interleaved f16 RGBA buffer.
    pub fn write_interleaved_f16<P: AsRef<Path>>(
        &self,
        path: P,
        rgba: &[f16],
        width: usize,
        height: usize,
    ) -> IoResult<()> {
        self.write_interleaved(path.as_ref(), rgba, width, height)
    }

    /// Writes four f32 channel buffers.
    #[allow(clippy::too_many_arguments)]
    pub fn write_planar_f32<P: AsRef<Path>>(
        &self,
        path: P,
        r: &[f32],
        g: &[f32],
        b: &[f32],
        a: &[f32],
        width: usize,
        height: usize,
    ) -> IoResult<()> {
        let path = path.as_ref();
        let extent = write_extent(path, width, height)?;
        let frame = FrameBuffer::new(Layout::Planar, extent, f32::SAMPLE_TYPE);
        write_frame(path, &frame, &[r, g, b, a], &self.options)
    }

    /// Writes three f64 channel buffers as f32 with opaque alpha.
    ///
    /// The format has no double type. Each sample is narrowed with an
    /// `as f32` cast from the source buffer.
    pub fn write_planar_f64<P: AsRef<Path>>(
        &self,
        path: P,
        r: &[f64],
        g: &[f64],
        b: &[f64],
        width: usize,
        height: usize,
    ) -> IoResult<()> {
        let path = path.as_ref();
        trace!(path = %path.display(), "write_planar_f64");

        let extent = write_extent(path, width, height)?;
        let count = extent.pixel_count();

        let narrow = |name: &str, source: &[f64]| -> IoResult<Vec<f32>> {
            let source = source.get(..count).ok_or_else(|| {
                IoError::write(
                    path,
                    format!("channel {name} holds {} samples, need {count}", source.len()),
                )
            })?;
            Ok(source.iter().map(|&v| v as f32).collect())
        };

        let r = narrow("R", r)?;
        let g = narrow("G", g)?;
        let b = narrow("B", b)?;
        let a = vec![1.0f32; count];
        debug!(samples = count, "Narrowed f64 channels to f32");

        self.write_planar_f32(path, &r, &g, &b, &a, width, height)
    }

    fn write_interleaved<T: crate::sample::ExrSample>(
        &self,
        path: &Path,
        rgba: &[T],
        width: usize,
        height: usize,
    ) -> IoResult<()> {
        let extent = write_extent(path, width, height)?;
        let frame = FrameBuffer::new(Layout::Interleaved, extent, T::SAMPLE_TYPE);
        write_frame(path, &frame, &[rgba], &self.options)
    }
}

/// Writes packed half RGBA pixels with default options.
pub fn write_rgba<P: AsRef<Path>>(path: P, pixels: &[Rgba], width: usize, height: usize) -> IoResult<()> {
    ExrWriter::default().write_rgba(path, pixels, width, height)
}

/// Writes an interleaved f32 RGBA buffer with default options.
///
/// `rgba` holds `width * height * 4` samples, R,G,B,A per pixel.
pub fn write_interleaved_f32<P: AsRef<Path>>(
    path: P,
    rgba: &[f32],
    width: usize,
    height: usize,
) -> IoResult<()> {
    ExrWriter::default().write_interleaved_f32(path, rgba, width, height)
}

/// Writes four f32 channel buffers with default options.
pub fn write_planar_f32<P: AsRef<Path>>(
    path: P,
    r: &[f32],
    g: &[f32],
    b: &[f32],
    a: &[f32],
    width: usize,
    height: usize,
) -> IoResult<()> {
    ExrWriter::default().write_planar_f32(path, r, g, b, a, width, height)
}

/// Writes an interleaved f16 RGBA buffer with default options.
pub fn write_interleaved_f16<P: AsRef<Path>>(
    path: P,
    rgba: &[f16],
    width: usize,
    height: usize,
) -> IoResult<()> {
    ExrWriter::default().write_interleaved_f16(path, rgba, width, height)
}

/// Writes three f64 channel buffers as f32 with opaque alpha, default options.
pub fn write_planar_f64<P: AsRef<Path>>(
    path: P,
    r: &[f64],
    g: &[f64],
    b: &[f64],
    width: usize,
    height: usize,
) -> IoResult<()> {
    ExrWriter::default().write_planar_f64(path, r, g, b, width, height)
}

/// Reads an EXR file as packed half RGBA pixels.
///
/// A missing alpha channel reads as 1.0.
pub fn read_rgba<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let image = read_interleaved::<f16>(path.as_ref())?;
    Ok(RgbaImage {
        pixels: image
            .data
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect(),
        width: image.width,
        height: image.height,
    })
}

/// Reads an EXR file into an interleaved f32 RGBA buffer.
///
/// # Example
///
/// ```rust,ignore
/// use exrio_io::exr;
///
/// let image = exr::read_interleaved_f32("input.exr")?;
/// let [r, g, b, a] = image.pixel(0, 0);
/// ```
pub fn read_interleaved_f32<P: AsRef<Path>>(path: P) -> IoResult<InterleavedImage<f32>> {
    read_interleaved(path.as_ref())
}

/// Reads an EXR file into an interleaved f16 RGBA buffer.
pub fn read_interleaved_f16<P: AsRef<Path>>(path: P) -> IoResult<InterleavedImage<f16>> {
    read_interleaved(path.as_ref())
}

/// Reads an EXR file into four f32 channel buffers.
pub fn read_planar_f32<P: AsRef<Path>>(path: P) -> IoResult<PlanarImage<f32>> {
    let decoded = read_frame::<f32>(path.as_ref(), Layout::Planar)?;
    let [r, g, b, a]: [Vec<f32>; 4] = decoded
        .planes
        .try_into()
        .map_err(|planes: Vec<Vec<f32>>| {
            IoError::open(path.as_ref(), format!("expected 4 planes, decoded {}", planes.len()))
        })?;
    Ok(PlanarImage {
        r,
        g,
        b,
        a,
        width: decoded.extent.width,
        height: decoded.extent.height,
        has_alpha: decoded.has_alpha,
    })
}

fn read_interleaved<T: crate::sample::ExrSample>(path: &Path) -> IoResult<InterleavedImage<T>> {
    let decoded = read_frame::<T>(path, Layout::Interleaved)?;
    let data = decoded
        .planes
        .into_iter()
        .next()
        .ok_or_else(|| IoError::open(path, "no plane decoded"))?;
    Ok(InterleavedImage {
        data,
        width: decoded.extent.width,
        height: decoded.extent.height,
        has_alpha: decoded.has_alpha,
    })
}
