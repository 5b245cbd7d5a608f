use std::io::{self, SeekFrom};

use crate::image_pipeline::stream::traits::Stream;

/// Growable in-memory stream.
///
/// Writing past the end extends the buffer, zero-filling any gap left by a
/// seek beyond the current length.
#[derive(Debug, Default, Clone)]
pub struct MemoryStream {
    data: Vec<u8>,
    position: usize,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream over existing bytes, positioned at the start.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Drops everything from the current position onward.
    pub fn truncate(&mut self) {
        self.data.truncate(self.position);
    }
}

impl Stream for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.data.len().saturating_sub(self.position);
        let count = available.min(buf.len());
        if count == 0 {
            return Ok(0);
        }
        buf[..count].copy_from_slice(&self.data[self.position..self.position + count]);
        self.position += count;
        Ok(count)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let end = self
            .position
            .checked_add(buf.len())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "write overflows stream"))?;
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(buf);
        self.position = end;
        Ok(buf.len())
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(offset) => (0i128, offset as i128),
            SeekFrom::Current(offset) => (self.position as i128, offset as i128),
            SeekFrom::End(offset) => (self.data.len() as i128, offset as i128),
        };
        let target = base + offset;
        if target < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek to a negative position",
            ));
        }
        self.position = usize::try_from(target)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek past addressable range"))?;
        Ok(self.position as u64)
    }

    fn position(&mut self) -> io::Result<u64> {
        Ok(self.position as u64)
    }

    fn length(&mut self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }
}
