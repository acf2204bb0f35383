//! # Channelizer-by-Decimation
//!
//! Instead of mixing, filtering, and tuning each 400 kHz channel out of a
//! wider capture, the receiver deliberately (ab)uses aliasing: advancing
//! the sample index by `num_channels` folds every channel onto the same
//! baseband. This costs nothing in CPU beyond a stride, at the price of
//! corrupting the capture if more than one channel transmits at the same
//! instant — a deliberate trade-off, since the CRC
//! check downstream discards any resulting corruption.
//!
//! The one subtlety this shortcut introduces is the **channel parity
//! rule**: when `num_channels` is even, the decimated center frequency
//! sits *between* two channels rather than on one, which inverts the
//! sign convention used to map a same-sign run's polarity to a bit value.

/// Which symbol value (`0` or `1`) a positive-frequency run represents,
/// and which a negative-frequency run represents, for a given channel
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelParity {
    /// Symbol value for a run where the last phase delta was positive.
    pub high_symbol: u8,
    /// Symbol value for a run where the last phase delta was negative or zero.
    pub low_symbol: u8,
}

impl ChannelParity {
    /// Derive the parity convention from the channel count.
    pub fn for_num_channels(num_channels: u8) -> Self {
        if num_channels % 2 == 0 {
            ChannelParity {
                high_symbol: 0,
                low_symbol: 1,
            }
        } else {
            ChannelParity {
                high_symbol: 1,
                low_symbol: 0,
            }
        }
    }

    /// The bit value a completed run represents, given the sign of the
    /// phase delta that ended it.
    pub fn symbol_for(&self, last_angle_positive: bool) -> u8 {
        if last_angle_positive {
            self.high_symbol
        } else {
            self.low_symbol
        }
    }
}

/// Iterate the decimated pair indices (each pair is two interleaved I,Q
/// bytes) within a block of `pair_count` total pairs: `0, num_channels,
/// 2*num_channels, ...`. Only the sample at index 0 of each group of
/// `num_channels` is ever converted and discriminated; the rest are
/// skipped outright rather than filtered.
pub fn decimated_pair_indices(pair_count: usize, num_channels: u8) -> impl Iterator<Item = usize> {
    (0..pair_count).step_by(num_channels as usize)
}
