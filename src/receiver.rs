//! # Receiver Pipeline
//!
//! Wires the stages together into a single-threaded, pull-driven loop:
//! read a block of interleaved I/Q bytes, decimate by channel count,
//! discriminate, slice into symbols, let the framer assemble complete
//! frames, validate each one's CRC, and emit the survivors. Everything
//! here runs on one thread with buffers allocated once up front.

use std::io::Read;

use log::{debug, warn};

use crate::channelizer::{decimated_pair_indices, ChannelParity};
use crate::constants::BLOCK_SIZE;
use crate::crc::validate_crc;
use crate::discriminator::calc_angle;
use crate::emitter::FrameSink;
use crate::error::ReceiverError;
use crate::framer::Framer;
use crate::iq::{cu8_to_complex, ComplexSample};
use crate::slicer::{SliceOutcome, SymbolSlicer};
use crate::stats::FrameStatistics;
use crate::util::logging::LogThrottle;

/// Drives samples from an input stream through discrimination, slicing,
/// and framing, emitting validated frames to a [`FrameSink`].
pub struct Receiver {
    num_channels: u8,
    last_sample: ComplexSample,
    slicer: SymbolSlicer,
    framer: Framer,
    stats: FrameStatistics,
    block: Vec<u8>,
    crc_fail_throttle: LogThrottle,
}

impl Receiver {
    /// Build a receiver for `num_channels` 400 kHz channels.
    /// `num_channels` must be in `1..=255`; callers validate this via CLI
    /// parsing before construction.
    pub fn new(num_channels: u8) -> Self {
        let parity = ChannelParity::for_num_channels(num_channels);
        Receiver {
            num_channels,
            last_sample: ComplexSample::ZERO,
            slicer: SymbolSlicer::new(parity),
            framer: Framer::new(),
            stats: FrameStatistics::new(),
            block: vec![0u8; BLOCK_SIZE * num_channels as usize * 2],
            crc_fail_throttle: LogThrottle::new(1000, 5),
        }
    }

    pub fn stats(&self) -> FrameStatistics {
        self.stats
    }

    /// Run the pull loop to completion, reading from `input` until EOF and
    /// emitting accepted frames to `sink`. A failed CRC is silently
    /// dropped (only counted in statistics).
    pub fn run<R: Read>(
        &mut self,
        mut input: R,
        sink: &mut dyn FrameSink,
    ) -> Result<(), ReceiverError> {
        loop {
            let bytes_read = read_fill(&mut input, &mut self.block)?;
            if bytes_read == 0 {
                return Ok(());
            }

            // A trailing odd byte (a lone I with no Q) can't form a
            // sample pair and is discarded; the next read starts a fresh
            // block boundary regardless.
            let pair_count = bytes_read / 2;

            for pair_index in decimated_pair_indices(pair_count, self.num_channels) {
                let offset = pair_index * 2;
                let sample = cu8_to_complex(self.block[offset], self.block[offset + 1]);
                let angle = calc_angle(sample, self.last_sample);
                self.last_sample = sample;

                match self.slicer.feed(angle, &mut self.framer) {
                    SliceOutcome::Idle => {}
                    SliceOutcome::NoiseReset => {
                        self.stats.record_noise_reset();
                        debug!("noise threshold exceeded, framer reset to searching");
                    }
                    SliceOutcome::FrameComplete(frame) => {
                        if validate_crc(&frame) {
                            self.stats.record_accepted();
                            sink.emit(&frame)?;
                        } else {
                            self.stats.record_rejected();
                            if self.crc_fail_throttle.allow() {
                                warn!("CRC mismatch on {}-byte frame, dropping", frame.len());
                            }
                        }
                    }
                }
            }

            if bytes_read < self.block.len() {
                return Ok(());
            }
        }
    }
}

/// Read until `buf` is full or the stream is exhausted, returning the
/// number of bytes actually read (which may be less than `buf.len()` on
/// the final, partial block).
fn read_fill<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<usize, ReceiverError> {
    let mut total = 0;
    while total < buf.len() {
        match input.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}
