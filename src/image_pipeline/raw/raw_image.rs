use std::fmt;

use crate::image_pipeline::common::error::{ImageError, LayoutError, Result};
use crate::image_pipeline::layout::{
    BasePixelType, ColorSpace, PixelDepth, calculate_image_length, remap,
};
use crate::image_pipeline::raw::buffer::PixelBuffer;

/// A decoded raster image with explicit layout metadata.
///
/// The buffer length always equals
/// `calculate_image_length(width, height, depth)` and never changes after
/// construction. There is no `Clone`: duplicating pixels goes through
/// [`RawImage::copy`] or [`RawImage::remapped`].
pub struct RawImage<'a> {
    width: u16,
    height: u16,
    base_type: BasePixelType,
    colorspace: ColorSpace,
    depth: PixelDepth,
    buffer: PixelBuffer<'a>,
}

impl RawImage<'static> {
    /// Allocates a zeroed image in linear color space.
    pub fn new(width: u16, height: u16, depth: PixelDepth) -> Result<Self> {
        Self::with_colorspace(width, height, depth, ColorSpace::Linear)
    }

    /// Allocates a zeroed image.
    ///
    /// Fails with [`ImageError::AllocationError`] instead of aborting when the
    /// allocator cannot provide the buffer.
    pub fn with_colorspace(
        width: u16,
        height: u16,
        depth: PixelDepth,
        colorspace: ColorSpace,
    ) -> Result<Self> {
        let length = calculate_image_length(width, height, depth)?;

        let mut data = Vec::new();
        data.try_reserve_exact(length)
            .map_err(|_| ImageError::AllocationError(length))?;
        data.resize(length, 0);

        Ok(Self {
            width,
            height,
            base_type: depth.base_type(),
            colorspace,
            depth,
            buffer: PixelBuffer::Owned(data),
        })
    }

    /// Takes ownership of an existing allocation of exactly the layout length.
    pub fn from_vec(
        data: Vec<u8>,
        width: u16,
        height: u16,
        depth: PixelDepth,
        colorspace: ColorSpace,
    ) -> Result<Self> {
        let length = calculate_image_length(width, height, depth)?;
        if data.len() != length {
            return Err(LayoutError::LengthMismatch {
                expected: length,
                actual: data.len(),
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            base_type: depth.base_type(),
            colorspace,
            depth,
            buffer: PixelBuffer::Owned(data),
        })
    }
}

impl<'a> RawImage<'a> {
    /// Views caller memory as an RGBA8, linear image.
    pub fn from_buffer(data: &'a mut [u8], width: u16, height: u16) -> Result<Self> {
        Self::from_buffer_with(data, width, height, PixelDepth::Rgba8, ColorSpace::Linear)
    }

    /// Views caller memory without taking ownership of it.
    ///
    /// `data` may be longer than the layout needs; the image covers only the
    /// leading `calculate_image_length(width, height, depth)` bytes.
    pub fn from_buffer_with(
        data: &'a mut [u8],
        width: u16,
        height: u16,
        depth: PixelDepth,
        colorspace: ColorSpace,
    ) -> Result<Self> {
        let length = calculate_image_length(width, height, depth)?;
        if data.len() < length {
            return Err(LayoutError::BufferTooSmall {
                needed: length,
                actual: data.len(),
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            base_type: depth.base_type(),
            colorspace,
            depth,
            buffer: PixelBuffer::Borrowed(&mut data[..length]),
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn base_type(&self) -> BasePixelType {
        self.base_type
    }

    pub fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    pub fn depth(&self) -> PixelDepth {
        self.depth
    }

    pub fn is_compressed(&self) -> bool {
        false
    }

    /// Whether the buffer was allocated by this image.
    pub fn is_owned(&self) -> bool {
        self.buffer.is_owned()
    }

    pub fn data(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut_slice()
    }

    pub fn data_length(&self) -> usize {
        self.buffer.len()
    }

    /// Overwrites this image's bytes with `other`'s.
    ///
    /// Only the byte lengths have to agree; layouts are not compared.
    pub fn copy(&mut self, other: &RawImage<'_>) -> Result<()> {
        if self.data_length() != other.data_length() {
            return Err(LayoutError::LengthMismatch {
                expected: self.data_length(),
                actual: other.data_length(),
            }
            .into());
        }

        self.data_mut().copy_from_slice(other.data());
        Ok(())
    }

    /// A newly allocated copy of this image converted to `depth`.
    pub fn remapped(&self, depth: PixelDepth) -> Result<RawImage<'static>> {
        let mut target = RawImage::with_colorspace(self.width, self.height, depth, self.colorspace)?;
        remap(
            self.data(),
            target.data_mut(),
            self.width,
            self.height,
            self.depth,
            depth,
        )?;
        Ok(target)
    }
}

impl fmt::Debug for RawImage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("base_type", &self.base_type)
            .field("colorspace", &self.colorspace)
            .field("depth", &self.depth)
            .field("buffer", &self.buffer)
            .finish()
    }
}
