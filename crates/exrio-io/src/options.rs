//! Writer configuration.
//!
//! Blocks are always written as scanlines in increasing line order; the
//! only choices are the compression codec and the layer name.

use exr::compression::Compression as ExrCompression;
use exr::image::{Blocks, Encoding};
use exr::meta::attribute::{LineOrder, Text};
use exr::meta::header::LayerAttributes;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// EXR compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// No compression.
    None,
    /// RLE compression.
    Rle,
    /// ZIP compression, one scanline per block.
    Zip1,
    /// ZIP compression, 16 scanlines per block (OpenEXR's default).
    #[default]
    Zip,
    /// PIZ compression (lossless, best for noisy images).
    Piz,
}

impl Compression {
    /// All supported codecs.
    pub const ALL: [Compression; 5] = [
        Compression::None,
        Compression::Rle,
        Compression::Zip1,
        Compression::Zip,
        Compression::Piz,
    ];

    /// Name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rle => "rle",
            Self::Zip1 => "zips",
            Self::Zip => "zip",
            Self::Piz => "piz",
        }
    }

    pub(crate) fn to_exr(self) -> ExrCompression {
        match self {
            Self::None => ExrCompression::Uncompressed,
            Self::Rle => ExrCompression::RLE,
            Self::Zip1 => ExrCompression::ZIP1,
            Self::Zip => ExrCompression::ZIP16,
            Self::Piz => ExrCompression::PIZ,
        }
    }

    /// Maps a stored codec back, `None` for codecs this crate never writes.
    pub(crate) fn from_exr(compression: ExrCompression) -> Option<Self> {
        match compression {
            ExrCompression::Uncompressed => Some(Self::None),
            ExrCompression::RLE => Some(Self::Rle),
            ExrCompression::ZIP1 => Some(Self::Zip1),
            ExrCompression::ZIP16 => Some(Self::Zip),
            ExrCompression::PIZ => Some(Self::Piz),
            _ => None,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown compression name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compression \"{0}\" (expected none, rle, zips, zip or piz)")]
pub struct ParseCompressionError(String);

impl FromStr for Compression {
    type Err = ParseCompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "none" | "uncompressed" => Ok(Self::None),
            "rle" => Ok(Self::Rle),
            "zips" | "zip1" => Ok(Self::Zip1),
            "zip" | "zip16" => Ok(Self::Zip),
            "piz" => Ok(Self::Piz),
            _ => Err(ParseCompressionError(s.to_string())),
        }
    }
}

/// Options applied to every file an [`ExrWriter`](crate::exr::ExrWriter) writes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WriteOptions {
    /// Compression codec.
    pub compression: Compression,
    /// Optional layer name attribute.
    pub layer_name: Option<String>,
}

impl WriteOptions {
    /// Scanline encoding with the configured codec.
    pub(crate) fn encoding(&self) -> Encoding {
        Encoding {
            compression: self.compression.to_exr(),
            blocks: Blocks::ScanLines,
            line_order: LineOrder::Increasing,
        }
    }

    /// Layer attributes carrying the layer name, if any.
    ///
    /// Fails when the name holds characters an EXR text attribute cannot store.
    pub(crate) fn layer_attributes(&self) -> Result<LayerAttributes, String> {
        match &self.layer_name {
            None => Ok(LayerAttributes::default()),
            Some(name) => Text::new_or_none(name)
                .map(|text| LayerAttributes::named(text))
                .ok_or_else(|| format!("layer name {name:?} is not valid EXR text")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for c in Compression::ALL {
            assert_eq!(c.name().parse::<Compression>(), Ok(c));
        }
        assert_eq!("ZIP".parse::<Compression>(), Ok(Compression::Zip));
        assert!("dwaa".parse::<Compression>().is_err());
    }

    #[test]
    fn test_exr_mapping_roundtrips() {
        for c in Compression::ALL {
            assert_eq!(Compression::from_exr(c.to_exr()), Some(c));
        }
        assert_eq!(Compression::from_exr(ExrCompression::B44), None);
    }

    #[test]
    fn test_default_is_zip16_scanlines() {
        let encoding = WriteOptions::default().encoding();
        assert_eq!(encoding.compression, ExrCompression::ZIP16);
        assert_eq!(encoding.blocks, Blocks::ScanLines);
        assert_eq!(encoding.line_order, LineOrder::Increasing);
    }

    #[test]
    fn test_layer_name() {
        let options = WriteOptions {
            layer_name: Some("beauty".into()),
            ..Default::default()
        };
        let attributes = options.layer_attributes().unwrap();
        assert_eq!(
            attributes.layer_name.map(|t| t.to_string()),
            Some("beauty".to_string())
        );
        assert!(WriteOptions::default().layer_attributes().unwrap().layer_name.is_none());
    }
}
