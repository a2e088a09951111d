//! # exrio-core
//!
//! Core types for exrio, the pixel buffer to channel frame adapter.
//!
//! This crate has no I/O. It describes memory:
//!
//! - [`SampleType`], [`PixelFormat`] - element types (half, float)
//! - [`Channel`] - the R, G, B, A channels
//! - [`Extent`], [`DataWindow`] - image size and stored pixel rectangle
//! - [`Slice`], [`FrameBuffer`], [`Layout`] - channel descriptors and their
//!   stride arithmetic for interleaved and planar buffers
//! - [`Rgba`] - packed half-float pixel
//! - [`InterleavedImage`], [`PlanarImage`], [`RgbaImage`] - owned buffers
//!   returned by reads
//!
//! ## Crate Structure
//!
//! ```text
//! exrio-core (this crate)
//!    ^
//!    |
//!    +-- exrio-io (OpenEXR read/write via the exr crate)
//!           ^
//!           |
//!           +-- exrio-cli (demonstration binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod rect;
pub mod slice;

// Re-exports for convenience
pub use channel::Channel;
pub use error::{Error, Result};
pub use format::{PixelFormat, SampleType};
pub use image::{InterleavedImage, PlanarImage, RgbaImage};
pub use pixel::Rgba;
pub use rect::{DataWindow, Extent};
pub use slice::{FrameBuffer, Layout, Slice};

/// Half-precision float, re-exported so callers share one `half` version.
pub use half::f16;
