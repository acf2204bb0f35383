//! # Receiver Error Handling
//!
//! This module defines the `ReceiverError` enum, which represents the
//! configuration- and I/O-level errors that can occur in the ea-receiver
//! crate.
//!
//! Corrupt frames and mid-frame loss of sync are *not* represented here:
//! per the protocol design, the physical layer is lossy by nature and the
//! CRC is the single source of truth for acceptance. Those events are
//! silently dropped and only surface as counters in [`crate::stats::FrameStatistics`].

use thiserror::Error;

/// Represents the different error types that can occur before or during
/// the setup of a receiver run. All variants are fatal: the process exits
/// non-zero without processing any samples.
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// The `-c` channel count was outside the valid range of 1..=255.
    #[error("Number of channels out of range!")]
    ChannelCountOutOfRange,

    /// No input file/stdin marker was given on the command line.
    #[error("Please specify input file")]
    MissingInputFile,

    /// The given input path could not be opened for reading.
    #[error("{path}: {source}")]
    CannotOpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A read from the input stream failed (other than a clean EOF).
    #[error("I/O error reading samples: {0}")]
    Io(#[from] std::io::Error),
}
