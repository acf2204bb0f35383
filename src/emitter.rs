//! # Frame Sink
//!
//! Where validated frames go once the [`crate::framer::Framer`] completes
//! them and [`crate::crc::validate_crc`] accepts them: hex-encoded, one
//! frame per line, flushed immediately so a consumer piping this tool's
//! stdout sees frames as they arrive rather than buffered in bulk.

use std::io::{self, Write};

use crate::util::hex::encode_hex;

/// Destination for successfully validated frames.
pub trait FrameSink {
    /// Emit one frame's raw bytes (CRC included). Implementations should
    /// treat this as append-only; ordering matches arrival order.
    fn emit(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// Writes each frame as a lowercase hex string followed by a newline,
/// flushing after every line.
pub struct HexLineSink<W: Write> {
    writer: W,
}

impl<W: Write> HexLineSink<W> {
    pub fn new(writer: W) -> Self {
        HexLineSink { writer }
    }
}

impl<W: Write> FrameSink for HexLineSink<W> {
    fn emit(&mut self, frame: &[u8]) -> io::Result<()> {
        let line = encode_hex(frame);
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// In-memory sink used by tests to collect emitted frames without
/// touching stdout.
#[cfg(test)]
#[derive(Default)]
pub struct CollectingSink {
    pub frames: Vec<Vec<u8>>,
}

#[cfg(test)]
impl FrameSink for CollectingSink {
    fn emit(&mut self, frame: &[u8]) -> io::Result<()> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}
