//! Bridge between exrio element types and the exr crate's sample storage.

use exr::image::FlatSamples;
use exr::block::samples::Sample;
use exrio_core::PixelFormat;
use half::f16;

/// Element type that can be handed to and taken from `exr` channel storage.
pub(crate) trait ExrSample: PixelFormat {
    /// Wraps one channel's row-major samples.
    fn into_flat(samples: Vec<Self>) -> FlatSamples;

    /// Converts a stored sample of any precision.
    fn from_sample(sample: Sample) -> Self;
}

impl ExrSample for f32 {
    fn into_flat(samples: Vec<Self>) -> FlatSamples {
        FlatSamples::F32(samples)
    }

    #[inline]
    fn from_sample(sample: Sample) -> Self {
        sample.to_f32()
    }
}

impl ExrSample for f16 {
    fn into_flat(samples: Vec<Self>) -> FlatSamples {
        FlatSamples::F16(samples)
    }

    #[inline]
    fn from_sample(sample: Sample) -> Self {
        sample.to_f16()
    }
}
