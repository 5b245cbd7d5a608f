//! Stream-to-codec adapter.
//!
//! The codec drives I/O through `std::io` traits; `CodecIo` answers those
//! calls by forwarding each one to the borrowed [`Stream`]. It keeps no
//! buffer of its own, so short reads and writes surface exactly as the
//! stream produces them.
//!
//! An anchored adapter reports positions relative to where the image starts,
//! so codecs that seek to absolute offsets work on embedded images.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::image_pipeline::stream::traits::Stream;

pub struct CodecIo<'a, S: Stream + ?Sized> {
    stream: &'a mut S,
    origin: u64,
}

impl<'a, S: Stream + ?Sized> CodecIo<'a, S> {
    pub fn new(stream: &'a mut S) -> Self {
        Self { stream, origin: 0 }
    }

    /// Treats the stream's current position as offset zero.
    pub fn anchored(stream: &'a mut S) -> io::Result<Self> {
        let origin = stream.position()?;
        Ok(Self { stream, origin })
    }

    pub fn origin(&self) -> u64 {
        self.origin
    }

    fn relative(&self, absolute: u64) -> io::Result<u64> {
        absolute.checked_sub(self.origin).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "position before image start")
        })
    }

    /// Moves the stream position by `n` bytes relative to the current one.
    pub fn skip(&mut self, n: i64) -> io::Result<()> {
        self.stream.seek(SeekFrom::Current(n)).map(|_| ())
    }

    /// True exactly when the stream sits at its end.
    pub fn eof(&mut self) -> io::Result<bool> {
        Ok(self.stream.position()? == self.stream.length()?)
    }
}

impl<S: Stream + ?Sized> Read for CodecIo<'_, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl<S: Stream + ?Sized> Write for CodecIo<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

impl<S: Stream + ?Sized> Seek for CodecIo<'_, S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let pos = match pos {
            SeekFrom::Start(offset) => {
                let absolute = self.origin.checked_add(offset).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "seek past the addressable range")
                })?;
                SeekFrom::Start(absolute)
            }
            other => other,
        };
        let absolute = self.stream.seek(pos)?;
        self.relative(absolute)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        let absolute = self.stream.position()?;
        self.relative(absolute)
    }
}
