use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::image_pipeline::stream::traits::Stream;

/// Exposes any `Read + Write + Seek` value, such as a `File`, as a [`Stream`].
#[derive(Debug)]
pub struct IoStream<T> {
    inner: T,
}

impl<T: Read + Write + Seek> IoStream<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write + Seek> Stream for IoStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }

    fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    fn length(&mut self) -> io::Result<u64> {
        let current = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        if current != end {
            self.inner.seek(SeekFrom::Start(current))?;
        }
        Ok(end)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
