//! The four channels the adapter maps: R, G, B and A.

use std::fmt;

/// A colour or alpha channel.
///
/// The discriminant is the channel's position inside an interleaved RGBA
/// pixel, which is also the order slices are inserted into a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Red
    R = 0,
    /// Green
    G = 1,
    /// Blue
    B = 2,
    /// Alpha
    A = 3,
}

impl Channel {
    /// All channels in interleaved order.
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    /// Number of channels in an RGBA pixel.
    pub const COUNT: usize = Self::ALL.len();

    /// Channel name as stored in the file's channel list.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
            Self::A => "A",
        }
    }

    /// Position inside an interleaved pixel.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Value used when a file lacks this channel.
    ///
    /// Colour channels read as black, alpha reads as opaque.
    #[inline]
    pub const fn default_fill(self) -> f32 {
        match self {
            Self::A => 1.0,
            _ => 0.0,
        }
    }

    /// Looks a channel up by its stored name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
