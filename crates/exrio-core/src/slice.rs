//! Channel descriptors and frame buffers.
//!
//! A [`FrameBuffer`] describes where each channel of an image lives in the
//! caller's memory. Every channel gets one [`Slice`]: the plane (buffer) it
//! points into, the byte offset of its first sample, and the byte strides
//! between horizontally and vertically adjacent samples. The file library
//! never sees the caller's buffers directly; it produces or consumes one
//! row-major run of samples per channel, and the frame buffer gathers or
//! scatters those runs through the slices.
//!
//! # Layouts
//!
//! | Layout | planes | x stride | base offset of channel `c` |
//! |---|---|---|---|
//! | [`Layout::Interleaved`] | 1 | `4 * size` | `c * size` |
//! | [`Layout::Planar`] | 4 | `size` | `0` (plane `c`) |
//!
//! The y stride is always `width * x_stride`. Sampling is 1x1.
//!
//! # Addressing
//!
//! The element a slice addresses at pixel `(x, y)` is
//!
//! ```text
//! (offset + x * x_stride + y * y_stride) / size
//! ```
//!
//! within its plane, so strides stay in bytes exactly as an OpenEXR
//! `Slice` would record them while all access goes through checked slices.
//!
//! # Usage
//!
//! ```rust
//! use exrio_core::{Channel, Extent, FrameBuffer, Layout, SampleType};
//!
//! let frame = FrameBuffer::new(Layout::Interleaved, Extent::new(3, 2), SampleType::F32);
//! let g = frame.slice(Channel::G).unwrap();
//! assert_eq!(g.offset, 4);
//! assert_eq!(g.x_stride, 16);
//! assert_eq!(g.y_stride, 48);
//! assert_eq!(g.element_index(1, 1), 17);
//! ```

use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::format::{PixelFormat, SampleType};
use crate::rect::Extent;

/// How RGBA samples are arranged in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// One buffer, R,G,B,A repeating per pixel.
    #[default]
    Interleaved,
    /// One buffer per channel.
    Planar,
}

impl Layout {
    /// Number of buffers this layout spans.
    #[inline]
    pub const fn planes(self) -> usize {
        match self {
            Self::Interleaved => 1,
            Self::Planar => Channel::COUNT,
        }
    }

    /// Samples per pixel inside one plane.
    #[inline]
    pub const fn channels_per_plane(self) -> usize {
        match self {
            Self::Interleaved => Channel::COUNT,
            Self::Planar => 1,
        }
    }

    /// Bytes between consecutive pixels of a row.
    #[inline]
    pub const fn x_stride(self, sample_type: SampleType) -> usize {
        self.channels_per_plane() * sample_type.size()
    }
}

/// Where one channel lives in memory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Channel this slice maps.
    pub channel: Channel,
    /// Element type of the memory it points at.
    pub sample_type: SampleType,
    /// Buffer index.
    pub plane: usize,
    /// Byte offset of the sample at pixel (0, 0).
    pub offset: usize,
    /// Bytes between horizontally adjacent samples.
    pub x_stride: usize,
    /// Bytes between vertically adjacent samples.
    pub y_stride: usize,
    /// Horizontal subsampling factor.
    pub x_sampling: usize,
    /// Vertical subsampling factor.
    pub y_sampling: usize,
    /// Value written on read when the file lacks the channel.
    pub fill: f32,
}

impl Slice {
    /// Creates a full-resolution slice with the channel's default fill.
    pub fn new(
        channel: Channel,
        sample_type: SampleType,
        plane: usize,
        offset: usize,
        x_stride: usize,
        y_stride: usize,
    ) -> Self {
        Self {
            channel,
            sample_type,
            plane,
            offset,
            x_stride,
            y_stride,
            x_sampling: 1,
            y_sampling: 1,
            fill: channel.default_fill(),
        }
    }

    /// Overrides the fill value.
    #[inline]
    pub fn with_fill(mut self, fill: f32) -> Self {
        self.fill = fill;
        self
    }

    /// Channel name as stored in files.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.channel.name()
    }

    /// Element index inside the plane for pixel `(x, y)`.
    #[inline]
    pub fn element_index(&self, x: usize, y: usize) -> usize {
        (self.offset + x * self.x_stride + y * self.y_stride) / self.sample_type.size()
    }
}

/// Channel-to-memory mapping for one read or write.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    extent: Extent,
    slices: Vec<Slice>,
}

impl FrameBuffer {
    /// Creates an empty frame buffer. Slices are added with [`insert`](Self::insert).
    pub fn empty(extent: Extent) -> Self {
        Self {
            extent,
            slices: Vec::with_capacity(Channel::COUNT),
        }
    }

    /// Creates the R,G,B,A frame buffer for a layout and element type.
    ///
    /// Stride arithmetic assumes `extent` passed [`Extent::validated`].
    pub fn new(layout: Layout, extent: Extent, sample_type: SampleType) -> Self {
        let size = sample_type.size();
        let x_stride = layout.x_stride(sample_type);
        let y_stride = extent.width * x_stride;

        let mut frame = Self::empty(extent);
        for channel in Channel::ALL {
            let (plane, offset) = match layout {
                Layout::Interleaved => (0, channel.index() * size),
                Layout::Planar => (channel.index(), 0),
            };
            frame.insert(Slice::new(channel, sample_type, plane, offset, x_stride, y_stride));
        }
        frame
    }

    /// Interleaved RGBA frame buffer.
    #[inline]
    pub fn interleaved(extent: Extent, sample_type: SampleType) -> Self {
        Self::new(Layout::Interleaved, extent, sample_type)
    }

    /// Planar RGBA frame buffer.
    #[inline]
    pub fn planar(extent: Extent, sample_type: SampleType) -> Self {
        Self::new(Layout::Planar, extent, sample_type)
    }

    /// Adds a slice, replacing any slice for the same channel.
    pub fn insert(&mut self, slice: Slice) {
        match self.slices.iter_mut().find(|s| s.channel == slice.channel) {
            Some(existing) => *existing = slice,
            None => {
                self.slices.push(slice);
                self.slices.sort_by_key(|s| s.channel);
            }
        }
    }

    /// Image extent the strides were computed for.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Slices in channel order.
    #[inline]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Slice for a channel, if present.
    pub fn slice(&self, channel: Channel) -> Option<&Slice> {
        self.slices.iter().find(|s| s.channel == channel)
    }

    /// Number of planes addressed by the slices.
    pub fn plane_count(&self) -> usize {
        self.slices.iter().map(|s| s.plane + 1).max().unwrap_or(0)
    }

    /// Elements a plane must hold so that every slice stays in bounds.
    pub fn required_len(&self, plane: usize) -> usize {
        if self.extent.is_empty() {
            return 0;
        }
        let (last_x, last_y) = (self.extent.width - 1, self.extent.height - 1);
        self.slices
            .iter()
            .filter(|s| s.plane == plane)
            .map(|s| s.element_index(last_x, last_y) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Checks that `planes` can back this frame buffer.
    pub fn validate<T: PixelFormat>(&self, planes: &[&[T]]) -> Result<()> {
        let expected = self.plane_count();
        if planes.len() != expected {
            return Err(Error::PlaneCountMismatch {
                expected,
                actual: planes.len(),
            });
        }
        for slice in &self.slices {
            if slice.sample_type != T::SAMPLE_TYPE {
                return Err(Error::SampleTypeMismatch {
                    channel: slice.name(),
                    expected: slice.sample_type,
                    actual: T::SAMPLE_TYPE,
                });
            }
        }
        for (plane, data) in planes.iter().enumerate() {
            let required = self.required_len(plane);
            if data.len() < required {
                return Err(Error::BufferTooSmall {
                    plane,
                    required,
                    actual: data.len(),
                });
            }
        }
        Ok(())
    }

    /// Allocates zeroed planes sized for this frame buffer.
    pub fn allocate<T: PixelFormat>(&self) -> Vec<Vec<T>> {
        (0..self.plane_count())
            .map(|plane| vec![T::default(); self.required_len(plane)])
            .collect()
    }

    /// Collects one channel's samples in row-major order.
    ///
    /// `planes` must have passed [`validate`](Self::validate).
    pub fn gather<T: PixelFormat>(&self, planes: &[&[T]], slice: &Slice) -> Vec<T> {
        let plane = planes[slice.plane];
        let mut samples = Vec::with_capacity(self.extent.pixel_count());
        for y in 0..self.extent.height {
            for x in 0..self.extent.width {
                samples.push(plane[slice.element_index(x, y)]);
            }
        }
        samples
    }

    /// Writes one channel into the planes, taking the sample for the
    /// `i`-th pixel in row-major order from `sample(i)`.
    ///
    /// `planes` must come from [`allocate`](Self::allocate).
    pub fn scatter<T, F>(&self, planes: &mut [Vec<T>], slice: &Slice, mut sample: F)
    where
        T: PixelFormat,
        F: FnMut(usize) -> T,
    {
        let plane = &mut planes[slice.plane];
        let width = self.extent.width;
        for y in 0..self.extent.height {
            for x in 0..width {
                plane[slice.element_index(x, y)] = sample(y * width + x);
            }
        }
    }

    /// Writes the slice's fill value into every pixel of its channel.
    pub fn fill<T: PixelFormat>(&self, planes: &mut [Vec<T>], slice: &Slice) {
        let value = T::from_f32(slice.fill);
        self.scatter(planes, slice, |_| value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    #[test]
    fn test_interleaved_strides() {
        for (w, h) in [(1, 1), (2, 2), (7, 3), (640, 480)] {
            for sample_type in [SampleType::F16, SampleType::F32] {
                let e = sample_type.size();
                let frame = FrameBuffer::interleaved(Extent::new(w, h), sample_type);
                let offsets: Vec<usize> = frame.slices().iter().map(|s| s.offset).collect();
                assert_eq!(offsets, vec![0, e, 2 * e, 3 * e]);
                for slice in frame.slices() {
                    assert_eq!(slice.plane, 0);
                    assert_eq!(slice.x_stride, 4 * e);
                    assert_eq!(slice.y_stride, w * slice.x_stride);
                    assert_eq!((slice.x_sampling, slice.y_sampling), (1, 1));
                }
                assert_eq!(frame.required_len(0), w * h * 4);
            }
        }
    }

    #[test]
    fn test_planar_strides() {
        let frame = FrameBuffer::planar(Extent::new(5, 3), SampleType::F32);
        assert_eq!(frame.plane_count(), 4);
        for (i, slice) in frame.slices().iter().enumerate() {
            assert_eq!(slice.plane, i);
            assert_eq!(slice.offset, 0);
            assert_eq!(slice.x_stride, 4);
            assert_eq!(slice.y_stride, 20);
            assert_eq!(frame.required_len(i), 15);
        }
    }

    #[test]
    fn test_alpha_fill_default() {
        let frame = FrameBuffer::planar(Extent::new(1, 1), SampleType::F16);
        assert_eq!(frame.slice(Channel::A).unwrap().fill, 1.0);
        assert_eq!(frame.slice(Channel::B).unwrap().fill, 0.0);
    }

    #[test]
    fn test_insert_replaces() {
        let mut frame = FrameBuffer::empty(Extent::new(2, 2));
        frame.insert(Slice::new(Channel::B, SampleType::F32, 0, 0, 4, 8));
        frame.insert(Slice::new(Channel::R, SampleType::F32, 1, 0, 4, 8));
        frame.insert(Slice::new(Channel::B, SampleType::F32, 2, 0, 4, 8).with_fill(0.5));
        assert_eq!(frame.slices().len(), 2);
        assert_eq!(frame.slices()[0].channel, Channel::R);
        let b = frame.slice(Channel::B).unwrap();
        assert_eq!(b.plane, 2);
        assert_eq!(b.fill, 0.5);
        assert_eq!(frame.plane_count(), 3);
    }

    #[test]
    fn test_gather_interleaved() {
        let frame = FrameBuffer::interleaved(Extent::new(2, 1), SampleType::F32);
        let pixels = [0.0f32, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0];
        frame.validate(&[&pixels[..]]).unwrap();

        let green = frame.gather(&[&pixels[..]], frame.slice(Channel::G).unwrap());
        assert_eq!(green, vec![1.0, 11.0]);
        let alpha = frame.gather(&[&pixels[..]], frame.slice(Channel::A).unwrap());
        assert_eq!(alpha, vec![3.0, 13.0]);
    }

    #[test]
    fn test_scatter_then_gather_planar() {
        let frame = FrameBuffer::planar(Extent::new(3, 2), SampleType::F32);
        let mut planes = frame.allocate::<f32>();
        for slice in frame.slices() {
            let base = slice.channel.index() as f32 * 100.0;
            frame.scatter(&mut planes, slice, |i| base + i as f32);
        }
        assert_eq!(planes[1], vec![100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);

        let views: Vec<&[f32]> = planes.iter().map(Vec::as_slice).collect();
        let blue = frame.gather(&views, frame.slice(Channel::B).unwrap());
        assert_eq!(blue, planes[2]);
    }

    #[test]
    fn test_fill_alpha_interleaved() {
        let frame = FrameBuffer::interleaved(Extent::new(2, 2), SampleType::F16);
        let mut planes = frame.allocate::<f16>();
        frame.fill(&mut planes, frame.slice(Channel::A).unwrap());
        for pixel in planes[0].chunks_exact(4) {
            assert_eq!(pixel, &[f16::ZERO, f16::ZERO, f16::ZERO, f16::ONE]);
        }
    }

    #[test]
    fn test_validate_rejects() {
        let frame = FrameBuffer::planar(Extent::new(2, 2), SampleType::F32);
        let full = [0.0f32; 4];
        let short = [0.0f32; 3];

        assert_eq!(
            frame.validate(&[&full[..], &full[..], &full[..]]),
            Err(Error::PlaneCountMismatch { expected: 4, actual: 3 })
        );
        assert_eq!(
            frame.validate(&[&full[..], &full[..], &short[..], &full[..]]),
            Err(Error::BufferTooSmall { plane: 2, required: 4, actual: 3 })
        );

        let halves = [f16::ZERO; 4];
        assert!(matches!(
            frame.validate(&[&halves[..], &halves[..], &halves[..], &halves[..]]),
            Err(Error::SampleTypeMismatch { channel: "R", .. })
        ));
    }
}
