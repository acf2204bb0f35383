//! # EnergyAxis Protocol Constants
//!
//! This module defines the per-mode constants used by the [`crate::framer`]
//! and [`crate::slicer`] to demodulate and de-whiten Elster EnergyAxis
//! frames. Mode 1 is Manchester-encoded at 35.555 kBaud; Mode 2 is NRZ at
//! 142.222 kBaud. Both modes share a single 64-bit preamble + syncword
//! search and a CRC-16/CCITT trailer; what differs is samples-per-symbol,
//! the preamble pattern, the de-whitening key, and the length field width.

/// Number of samples read per channel, per read() call.
pub const BLOCK_SIZE: usize = 16384;

/// Default number of 400 kHz channels received when `-c` is not given.
pub const DEFAULT_NUM_CHANNELS: u8 = 6;

/// Consecutive zero-symbol runs tolerated before the framer is reset for
/// loss of sync.
pub const NOISE_THRESHOLD: u8 = 5;

/// Framer message buffer size: the largest Mode 2 payload (`u16::MAX`
/// encoded in the two big-endian length bytes) plus the 2 trailing CRC
/// bytes. The original C source sizes this buffer to `UINT16_MAX`
/// (65,535), one byte short of the worst case; see DESIGN.md.
pub const MAX_FRAME_LEN: usize = u16::MAX as usize + 2;

/// On-air modulation in use for a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Manchester-encoded, 35.555 kBaud, 11.25 samples/symbol @ 400 ksps.
    Mode1,
    /// NRZ, 142.222 kBaud, 2.81 samples/symbol @ 400 ksps.
    Mode2,
}

impl Mode {
    /// 64-bit preamble + syncword that triggers detection of this mode.
    pub const fn preamble(self) -> u64 {
        match self {
            Mode::Mode1 => 0xAAAA_AAAA_55A5_9AA6,
            Mode::Mode2 => 0xAAAA_AAAA_9A99_A656,
        }
    }

    /// XOR de-whitening key applied to each completed post-syncword byte.
    pub const fn xor_key(self) -> u8 {
        match self {
            Mode::Mode1 => 0x55,
            Mode::Mode2 => 0xAA,
        }
    }

    /// Samples-per-symbol, scaled by 100, used by [`crate::slicer`]'s
    /// round-half-up division.
    pub const fn sps_x100(self) -> u32 {
        match self {
            Mode::Mode1 => 1125,
            Mode::Mode2 => 281,
        }
    }

    /// Number of length-field bytes preceding the payload (1 for Mode 1,
    /// 2 big-endian bytes for Mode 2).
    pub const fn length_field_bytes(self) -> usize {
        match self {
            Mode::Mode1 => 1,
            Mode::Mode2 => 2,
        }
    }
}
