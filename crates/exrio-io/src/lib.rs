//! # exrio-io
//!
//! OpenEXR read and write for interleaved and planar pixel buffers.
//!
//! Compression, scanline layout and file structure are handled by the
//! [`exr`](https://docs.rs/exr) crate. This crate arranges the caller's
//! memory into one channel per R, G, B and A through an
//! [`exrio_core::FrameBuffer`], and back.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use exrio_io::exr;
//!
//! let image = exr::read_interleaved_f32("input.exr")?;
//! exr::write_interleaved_f32("copy.exr", &image.data, image.width, image.height)?;
//! ```
//!
//! # Errors
//!
//! Every operation returns [`IoResult`]. Failures are either
//! [`IoError::Open`] or [`IoError::Write`], each naming the path and the
//! underlying cause, and are also logged through `tracing` at `warn` level.
//!
//! # Dependencies
//!
//! - `exrio-core` - frame buffers, element types, owned images
//! - `exr` - OpenEXR encoding and decoding
//! - `tracing` - diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod frame;
mod options;
mod sample;

pub mod exr;
pub mod info;

pub use error::{IoError, IoResult};
pub use info::{ChannelInfo, ExrInfo, read_info};
pub use options::{Compression, ParseCompressionError, WriteOptions};

pub use exrio_core::{InterleavedImage, PlanarImage, Rgba, RgbaImage, f16};
