//! Drives the exr crate through a [`FrameBuffer`].
//!
//! Writing gathers every slice of the caller's buffers into one channel of
//! a single scanline layer. Reading decodes the first flat layer and
//! scatters each stored R, G, B or A channel back through the slices;
//! channels the file lacks receive the slice's fill value.

use crate::error::{IoError, IoResult};
use crate::options::WriteOptions;
use crate::sample::ExrSample;
use exr::image::read::read;
use exr::image::write::WritableImage;
use exr::image::{AnyChannel, AnyChannels, FlatSamples, Image, Layer};
use exr::math::Vec2;
use exr::prelude::{ReadChannels, ReadLayers};
use exrio_core::{Channel, DataWindow, Extent, FrameBuffer, Layout};
use smallvec::SmallVec;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Buffers filled by [`read_frame`], one per plane of the layout.
#[derive(Debug)]
pub(crate) struct DecodedFrame<T> {
    pub planes: Vec<Vec<T>>,
    pub extent: Extent,
    pub has_alpha: bool,
}

/// Writes `planes`, described by `frame`, as a scanline EXR file.
pub(crate) fn write_frame<T: ExrSample>(
    path: &Path,
    frame: &FrameBuffer,
    planes: &[&[T]],
    options: &WriteOptions,
) -> IoResult<()> {
    trace!(path = %path.display(), "write_frame");

    let result = encode(path, frame, planes, options);
    if let Err(ref e) = result {
        warn!(error = %e, "EXR write failed");
    }
    result
}

/// Validates a requested write extent, logging the failure like any other
/// write error.
pub(crate) fn write_extent(path: &Path, width: usize, height: usize) -> IoResult<Extent> {
    Extent::validated(width, height).map_err(|e| {
        let e = IoError::write(path, e);
        warn!(error = %e, "EXR write failed");
        e
    })
}

fn encode<T: ExrSample>(
    path: &Path,
    frame: &FrameBuffer,
    planes: &[&[T]],
    options: &WriteOptions,
) -> IoResult<()> {
    let extent = frame.extent();
    Extent::validated(extent.width, extent.height).map_err(|e| IoError::write(path, e))?;
    frame.validate(planes).map_err(|e| IoError::write(path, e))?;

    debug!(
        width = extent.width,
        height = extent.height,
        sample_type = %T::SAMPLE_TYPE,
        planes = planes.len(),
        compression = %options.compression,
        "Writing frame buffer"
    );

    let channels: SmallVec<[AnyChannel<FlatSamples>; 4]> = frame
        .slices()
        .iter()
        .map(|slice| AnyChannel::new(slice.name(), T::into_flat(frame.gather(planes, slice))))
        .collect();

    let attributes = options
        .layer_attributes()
        .map_err(|reason| IoError::write(path, reason))?;

    let layer = Layer::new(
        (extent.width, extent.height),
        attributes,
        options.encoding(),
        AnyChannels::sort(channels),
    );

    Image::from_layer(layer)
        .write()
        .non_parallel()
        .to_file(path)
        .map_err(|e| IoError::write(path, e))
}

/// Reads the first flat layer of `path` into freshly allocated planes.
pub(crate) fn read_frame<T: ExrSample>(path: &Path, layout: Layout) -> IoResult<DecodedFrame<T>> {
    trace!(path = %path.display(), ?layout, "read_frame");

    let result = decode(path, layout);
    if let Err(ref e) = result {
        warn!(error = %e, "EXR read failed");
    }
    result
}

fn decode<T: ExrSample>(path: &Path, layout: Layout) -> IoResult<DecodedFrame<T>> {
    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .all_channels()
        .first_valid_layer()
        .all_attributes()
        .non_parallel()
        .from_file(path)
        .map_err(|e| IoError::open(path, e))?;

    let layer = image.layer_data;
    let position = layer.attributes.layer_position;
    let window = DataWindow::from_origin_size(
        (position.x(), position.y()),
        Extent::new(layer.size.width(), layer.size.height()),
    )
    .map_err(|e| IoError::open(path, e))?;
    let extent = window.extent().map_err(|e| IoError::open(path, e))?;

    let frame = FrameBuffer::new(layout, extent, T::SAMPLE_TYPE);
    let mut planes = frame.allocate::<T>();
    let mut has_alpha = false;

    for slice in frame.slices() {
        let stored = layer
            .channel_data
            .list
            .iter()
            .find(|channel| channel.name.to_string() == slice.name());

        let Some(stored) = stored else {
            debug!(channel = slice.name(), fill = slice.fill, "Channel missing, filling");
            frame.fill(&mut planes, slice);
            continue;
        };

        if stored.sampling != Vec2(1, 1) {
            return Err(IoError::open(
                path,
                format!("channel {} is subsampled, which is not supported", slice.name()),
            ));
        }
        let samples = &stored.sample_data;
        if samples.len() != extent.pixel_count() {
            return Err(IoError::open(
                path,
                format!(
                    "channel {} holds {} samples, expected {}",
                    slice.name(),
                    samples.len(),
                    extent.pixel_count()
                ),
            ));
        }

        frame.scatter(&mut planes, slice, |i| T::from_sample(samples.value_by_flat_index(i)));
        if slice.channel == Channel::A {
            has_alpha = true;
        }
    }

    debug!(
        window = ?window,
        width = extent.width,
        height = extent.height,
        has_alpha,
        "Read frame buffer"
    );

    Ok(DecodedFrame {
        planes,
        extent,
        has_alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exrio_core::{SampleType, Slice};
    use tempfile::tempdir;

    /// Planar R,G,B without an alpha slice.
    fn rgb_frame(extent: Extent) -> FrameBuffer {
        let size = SampleType::F32.size();
        let mut frame = FrameBuffer::empty(extent);
        for channel in [Channel::R, Channel::G, Channel::B] {
            frame.insert(Slice::new(
                channel,
                SampleType::F32,
                channel.index(),
                0,
                size,
                extent.width * size,
            ));
        }
        frame
    }

    #[test]
    fn test_missing_alpha_is_filled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.exr");
        let extent = Extent::new(3, 2);
        let r = [0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6];
        let g = [0.0f32; 6];
        let b = [2.0f32; 6];

        let frame = rgb_frame(extent);
        write_frame(&path, &frame, &[&r[..], &g[..], &b[..]], &WriteOptions::default()).unwrap();

        let decoded = read_frame::<f32>(&path, Layout::Interleaved).unwrap();
        assert!(!decoded.has_alpha);
        assert_eq!(decoded.extent, extent);
        assert_eq!(decoded.planes.len(), 1);
        for (i, pixel) in decoded.planes[0].chunks_exact(4).enumerate() {
            assert_eq!(pixel, [r[i], g[i], b[i], 1.0]);
        }

        let planar = read_frame::<f32>(&path, Layout::Planar).unwrap();
        assert_eq!(planar.planes[0], r);
        assert!(planar.planes[3].iter().all(|&a| a == 1.0));
    }

    #[test]
    fn test_plane_count_mismatch_is_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("planes.exr");
        let frame = rgb_frame(Extent::new(1, 1));

        let err = write_frame(&path, &frame, &[&[0.0f32][..]], &WriteOptions::default()).unwrap_err();
        assert!(err.is_write());
        assert!(!path.exists());
    }
}
