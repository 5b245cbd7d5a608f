//! Stream abstraction module
//!
//! This module provides the seekable byte stream the pipelines read from and
//! write to, plus the adapter that exposes a stream to the external codec.

mod adapter;
mod io_stream;
mod memory;
mod traits;

pub use adapter::CodecIo;
pub use io_stream::IoStream;
pub use memory::MemoryStream;
pub use traits::Stream;
