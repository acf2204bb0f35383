//! # Command-Line Interface
//!
//! A single-binary CLI: one positional input path (or `-` for stdin) and
//! an optional `-c`/`--channels` count, built with `clap`'s derive API.

use clap::Parser;

use crate::constants::DEFAULT_NUM_CHANNELS;
use crate::error::ReceiverError;

/// Receive and decode Elster EnergyAxis frames from a raw cu8 IQ capture.
#[derive(Parser, Debug)]
#[command(name = "ea-receiver")]
#[command(about = "Software-defined-radio receiver for Elster EnergyAxis AMR frames")]
pub struct Cli {
    /// Number of 400 kHz channels present in the capture (1..=255).
    #[arg(short = 'c', long = "channels", default_value_t = DEFAULT_NUM_CHANNELS)]
    pub channels: u8,

    /// Input file path, or `-` to read from stdin.
    pub input: Option<String>,
}

impl Cli {
    /// Validate the parsed arguments, matching the original tool's
    /// `getopt`-era checks: a channel count of zero is
    /// rejected even though `u8` already bounds the upper end, and an
    /// input source must be named.
    pub fn validate(&self) -> Result<(), ReceiverError> {
        if self.channels == 0 {
            return Err(ReceiverError::ChannelCountOutOfRange);
        }
        if self.input.is_none() {
            return Err(ReceiverError::MissingInputFile);
        }
        Ok(())
    }
}
