//! # ea-receiver - A Rust Receiver for the Elster EnergyAxis AMR Protocol
//!
//! This crate demodulates and decodes Elster EnergyAxis automatic-meter-
//! reading frames from a raw cu8 (interleaved unsigned 8-bit I/Q) capture,
//! such as one produced by an RTL-SDR tuned to the 900 MHz ISM band.
//!
//! ## Pipeline
//!
//! Each decimated sample pair is pushed through, in order:
//!
//! 1. [`iq`] - convert the cu8 byte pair to a complex baseband sample.
//! 2. [`discriminator`] - take the angle of the product with the previous
//!    sample's conjugate, an instantaneous-frequency proxy.
//! 3. [`channelizer`] - decide which of the receiver's aliased channels a
//!    sample belongs to, and the bit-polarity convention that implies.
//! 4. [`slicer`] - track runs of same-sign phase delta and map run length
//!    to a whole number of symbols.
//! 5. [`framer`] - assemble symbols into bytes, searching for either
//!    modulation's preamble, then the length field, then the body.
//! 6. [`crc`] - validate the trailing CRC-16/CCITT before a frame is
//!    accepted.
//!
//! [`receiver`] wires these into the single-threaded read loop; [`cli`]
//! and `main` wire that loop to a file or stdin.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! ea-receiver = "0.1.0"
//! ```
//!
//! ```rust,no_run
//! use ea_receiver::receiver::Receiver;
//! use ea_receiver::emitter::HexLineSink;
//!
//! let mut receiver = Receiver::new(6);
//! let mut sink = HexLineSink::new(std::io::stdout());
//! let input = std::io::stdin();
//! receiver.run(input.lock(), &mut sink).unwrap();
//! ```

pub mod channelizer;
pub mod cli;
pub mod constants;
pub mod crc;
pub mod discriminator;
pub mod emitter;
pub mod error;
pub mod framer;
pub mod iq;
pub mod logging;
pub mod receiver;
pub mod slicer;
pub mod stats;
pub mod util;

pub use crate::error::ReceiverError;
pub use crate::logging::init_logger;
pub use crate::receiver::Receiver;
pub use crate::stats::FrameStatistics;
