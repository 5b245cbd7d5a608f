//! Raw image serialization
//!
//! Layout: `RIMG` magic, version byte, width and height (`u16` LE), depth
//! tag, colorspace tag, payload length (`u64` LE), payload bytes.

use std::io::{Read, Write};

use tracing::debug;

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::layout::{ColorSpace, PixelDepth};
use crate::image_pipeline::raw::raw_image::RawImage;
use crate::image_pipeline::stream::{CodecIo, Stream};

const MAGIC: &[u8; 4] = b"RIMG";
const VERSION: u8 = 1;
const HEADER_LEN: usize = 19;

impl RawImage<'_> {
    /// Serializes layout metadata and pixel bytes to `stream`.
    pub fn write(&self, stream: &mut dyn Stream) -> Result<()> {
        let mut header = [0u8; HEADER_LEN];
        header[0..4].copy_from_slice(MAGIC);
        header[4] = VERSION;
        header[5..7].copy_from_slice(&self.width().to_le_bytes());
        header[7..9].copy_from_slice(&self.height().to_le_bytes());
        header[9] = self.depth().tag();
        header[10] = self.colorspace().tag();
        header[11..19].copy_from_slice(&(self.data_length() as u64).to_le_bytes());

        let mut io = CodecIo::new(stream);
        io.write_all(&header)?;
        io.write_all(self.data())?;
        io.flush()?;

        debug!(
            "Wrote raw image {}x{} {:?}, {} bytes",
            self.width(),
            self.height(),
            self.depth(),
            self.data_length()
        );
        Ok(())
    }
}

impl RawImage<'static> {
    /// Reads an image previously produced by [`RawImage::write`].
    pub fn read(stream: &mut dyn Stream) -> Result<Self> {
        let mut io = CodecIo::new(stream);

        let mut header = [0u8; HEADER_LEN];
        io.read_exact(&mut header)?;

        if &header[0..4] != MAGIC {
            return Err(ImageError::InvalidHeader("bad magic".to_string()));
        }
        if header[4] != VERSION {
            return Err(ImageError::InvalidHeader(format!(
                "unsupported version {}",
                header[4]
            )));
        }

        let width = u16::from_le_bytes([header[5], header[6]]);
        let height = u16::from_le_bytes([header[7], header[8]]);
        let depth = PixelDepth::from_tag(header[9])
            .ok_or_else(|| ImageError::InvalidHeader(format!("unknown depth tag {}", header[9])))?;
        let colorspace = ColorSpace::from_tag(header[10]).ok_or_else(|| {
            ImageError::InvalidHeader(format!("unknown colorspace tag {}", header[10]))
        })?;

        let mut length = [0u8; 8];
        length.copy_from_slice(&header[11..19]);
        let payload_length = u64::from_le_bytes(length);

        let mut image = RawImage::with_colorspace(width, height, depth, colorspace)?;
        if payload_length != image.data_length() as u64 {
            return Err(ImageError::InvalidHeader(format!(
                "payload of {} bytes does not match {}x{} {:?}",
                payload_length, width, height, depth
            )));
        }

        io.read_exact(image.data_mut())?;
        Ok(image)
    }
}
