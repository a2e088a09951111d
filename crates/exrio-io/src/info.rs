//! Header-only probing.
//!
//! Reads the first header of a file without decoding pixels: the data
//! window, the channel list and the codec. Cheap enough to call before
//! deciding which read layout to use.

use crate::error::{IoError, IoResult};
use crate::options::Compression;
use exr::meta::MetaData;
use exr::meta::attribute::SampleType as ExrSampleType;
use exrio_core::{Channel, DataWindow, Extent, SampleType};
use std::path::Path;
use tracing::trace;

/// One stored channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Channel name.
    pub name: String,
    /// Stored element type.
    pub sample_type: SampleType,
    /// Horizontal and vertical subsampling.
    pub sampling: (usize, usize),
}

/// Summary of a file's first header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExrInfo {
    /// Stored pixel rectangle.
    pub data_window: DataWindow,
    /// Width and height of the data window.
    pub extent: Extent,
    /// Channels in file order (alphabetical).
    pub channels: Vec<ChannelInfo>,
    /// Codec, `None` for codecs this crate does not write.
    pub compression: Option<Compression>,
    /// Layer name attribute.
    pub layer_name: Option<String>,
    /// Number of headers (parts) in the file.
    pub parts: usize,
}

impl ExrInfo {
    /// Whether the first part stores an `A` channel.
    pub fn has_alpha(&self) -> bool {
        self.channel(Channel::A).is_some()
    }

    /// Stored channel for one of R, G, B, A.
    pub fn channel(&self, channel: Channel) -> Option<&ChannelInfo> {
        self.channels.iter().find(|c| c.name == channel.name())
    }
}

/// Reads the first header of an EXR file.
///
/// # Example
///
/// ```rust,ignore
/// use exrio_io::read_info;
///
/// let info = read_info("render.exr")?;
/// println!("{}x{}, alpha: {}", info.extent.width, info.extent.height, info.has_alpha());
/// ```
pub fn read_info<P: AsRef<Path>>(path: P) -> IoResult<ExrInfo> {
    let path = path.as_ref();
    trace!(path = %path.display(), "read_info");

    let meta = MetaData::read_from_file(path, false).map_err(|e| IoError::open(path, e))?;
    let header = meta
        .headers
        .first()
        .ok_or_else(|| IoError::open(path, "EXR has no headers"))?;
    if header.deep {
        return Err(IoError::open(path, "deep data is not supported"));
    }

    let position = header.own_attributes.layer_position;
    let data_window = DataWindow::from_origin_size(
        (position.x(), position.y()),
        Extent::new(header.layer_size.width(), header.layer_size.height()),
    )
    .map_err(|e| IoError::open(path, e))?;
    let extent = data_window.extent().map_err(|e| IoError::open(path, e))?;

    let channels = header
        .channels
        .list
        .iter()
        .map(|ch| ChannelInfo {
            name: ch.name.to_string(),
            sample_type: match ch.sample_type {
                ExrSampleType::F16 => SampleType::F16,
                ExrSampleType::F32 => SampleType::F32,
                ExrSampleType::U32 => SampleType::U32,
            },
            sampling: (ch.sampling.x(), ch.sampling.y()),
        })
        .collect();

    Ok(ExrInfo {
        data_window,
        extent,
        channels,
        compression: Compression::from_exr(header.compression),
        layer_name: header.own_attributes.layer_name.as_ref().map(|t| t.to_string()),
        parts: meta.headers.len(),
    })
}
