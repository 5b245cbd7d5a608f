//! Pixel layout tags

/// Channel semantics of a pixel, independent of how the channels are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasePixelType {
    /// Luminance
    L,
    /// Luminance + alpha
    La,
    Rgb,
    Rgba,
}

impl BasePixelType {
    pub fn channels(self) -> u8 {
        match self {
            Self::L => 1,
            Self::La => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, Self::La | Self::Rgba)
    }

    pub fn is_color(self) -> bool {
        matches!(self, Self::Rgb | Self::Rgba)
    }

    /// Maps a codec channel count onto channel semantics.
    ///
    /// Only 1 to 4 channels have a meaning; anything else is `None`.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            1 => Some(Self::L),
            2 => Some(Self::La),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }

    /// The 8-bit-per-channel depth codecs exchange for this base type.
    pub fn canonical_depth(self) -> PixelDepth {
        match self {
            Self::L => PixelDepth::Luminance8,
            Self::La => PixelDepth::LuminanceAlpha8,
            Self::Rgb => PixelDepth::Rgb8,
            Self::Rgba => PixelDepth::Rgba8,
        }
    }

    pub fn without_alpha(self) -> Self {
        match self {
            Self::La => Self::L,
            Self::Rgba => Self::Rgb,
            other => other,
        }
    }
}

/// Storage layout of a single pixel.
///
/// Packed variants store one little-endian `u16` per pixel with the first
/// channel in the most significant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PixelDepth {
    #[default]
    Rgba8 = 0,
    Rgb8 = 1,
    LuminanceAlpha8 = 2,
    Luminance8 = 3,
    /// 4 bits per channel, RRRRGGGGBBBBAAAA
    Rgba4 = 4,
    /// RRRRRGGGGGBBBBBA
    Rgb5A1 = 5,
    /// RRRRRGGGGGGBBBBB
    Rgb565 = 6,
}

impl PixelDepth {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
            Self::Rgb8 => 3,
            Self::LuminanceAlpha8 | Self::Rgba4 | Self::Rgb5A1 | Self::Rgb565 => 2,
            Self::Luminance8 => 1,
        }
    }

    pub fn base_type(self) -> BasePixelType {
        match self {
            Self::Rgba8 | Self::Rgba4 | Self::Rgb5A1 => BasePixelType::Rgba,
            Self::Rgb8 | Self::Rgb565 => BasePixelType::Rgb,
            Self::LuminanceAlpha8 => BasePixelType::La,
            Self::Luminance8 => BasePixelType::L,
        }
    }

    pub fn is_packed(self) -> bool {
        matches!(self, Self::Rgba4 | Self::Rgb5A1 | Self::Rgb565)
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Rgba8),
            1 => Some(Self::Rgb8),
            2 => Some(Self::LuminanceAlpha8),
            3 => Some(Self::Luminance8),
            4 => Some(Self::Rgba4),
            5 => Some(Self::Rgb5A1),
            6 => Some(Self::Rgb565),
            _ => None,
        }
    }
}

/// How sample values are meant to be interpreted. Carried, never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorSpace {
    #[default]
    Linear = 0,
    Srgb = 1,
}

impl ColorSpace {
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Linear),
            1 => Some(Self::Srgb),
            _ => None,
        }
    }
}
