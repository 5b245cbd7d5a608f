//! Codec configuration and format types

/// Container format written by the encode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Bmp,
    Tga,
    Jpeg,
}

impl ImageFormat {
    /// Maps a file extension to a format.
    ///
    /// Matching is case-sensitive and a single leading dot is ignored. Empty
    /// and unrecognized extensions select PNG.
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        match extension {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "tga" => Self::Tga,
            "bmp" => Self::Bmp,
            _ => Self::Png,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Tga => "tga",
            Self::Jpeg => "jpg",
        }
    }

    /// Whether the container can store an alpha channel.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }

    pub(crate) fn from_codec(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Bmp => Some(Self::Bmp),
            image::ImageFormat::Tga => Some(Self::Tga),
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// What a probe learns about an encoded image without decoding its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    /// `None` when the codec recognized a container this crate cannot encode.
    pub format: Option<ImageFormat>,
}

/// PNG deflate effort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    /// Fastest, largest file
    Fast,
    /// Balanced (default)
    Default,
    /// Smallest file, slowest
    Best,
}

/// Configuration shared by the decode and encode pipelines
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Deflate effort used when writing PNG
    pub png_compression: PngCompression,
    /// Whether to reject decoded images with zero width or height
    pub validate_dimensions: bool,
    /// Largest width or height accepted when decoding
    pub max_dimension: Option<u16>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            png_compression: PngCompression::Default,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl CodecConfig {
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    png_compression: Option<PngCompression>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u16>>,
}

impl CodecConfigBuilder {
    pub fn png_compression(mut self, compression: PngCompression) -> Self {
        self.png_compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u16>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> CodecConfig {
        let default = CodecConfig::default();
        CodecConfig {
            png_compression: self.png_compression.unwrap_or(default.png_compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
