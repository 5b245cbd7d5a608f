//! Pixel buffer ownership

use std::fmt;

/// Backing bytes of a [`RawImage`](super::RawImage).
///
/// `Owned` memory was allocated by the image and is released with it;
/// `Borrowed` memory belongs to the caller and outlives the image.
pub enum PixelBuffer<'a> {
    Owned(Vec<u8>),
    Borrowed(&'a mut [u8]),
}

impl PixelBuffer<'_> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(data) => data,
            Self::Borrowed(data) => data,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Owned(data) => data,
            Self::Borrowed(data) => data,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl fmt::Debug for PixelBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_owned() { "Owned" } else { "Borrowed" };
        write!(f, "{kind}({} bytes)", self.len())
    }
}
