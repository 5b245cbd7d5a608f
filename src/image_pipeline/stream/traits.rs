use std::io::{self, SeekFrom};

/// A seekable byte stream.
///
/// Short reads and writes are allowed; a read of zero bytes means the end of
/// the stream was reached.
pub trait Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;
    fn position(&mut self) -> io::Result<u64>;
    fn length(&mut self) -> io::Result<u64>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (**self).seek(pos)
    }

    fn position(&mut self) -> io::Result<u64> {
        (**self).position()
    }

    fn length(&mut self) -> io::Result<u64> {
        (**self).length()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
