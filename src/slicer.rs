//! # Symbol Slicer
//!
//! Tracks runs of same-sign phase delta and, on each zero-crossing (sign
//! flip, or either side being exactly zero — see below on
//! `atan2` zero handling), maps the run length to a whole number of
//! symbols and delivers that many copies of the run's bit value to the
//! [`crate::framer::Framer`]. A run that rounds to zero symbols while the
//! framer is mid-frame counts as noise; five consecutive noisy runs trip
//! the framer back to searching.

use crate::channelizer::ChannelParity;
use crate::constants::NOISE_THRESHOLD;
use crate::framer::Framer;

/// Sign of a phase delta, tracked explicitly so "same sign, both nonzero"
/// can be checked without relying on float multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    fn of(angle: f32) -> Self {
        if angle > 0.0 {
            Sign::Positive
        } else if angle < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }
}

/// Converts a consecutive sample count into a symbol count for the given
/// mode's samples-per-symbol, using round-half-up division.
pub fn calc_symbol_count(sample_count: u32, sps_x100: u32) -> u32 {
    ((sample_count * 1000 / sps_x100) + 5) / 10
}

/// What feeding one angle into the slicer caused to happen downstream.
/// At most one of these can occur per call: a completed run either
/// yields one or more symbols (at most one of which can complete a
/// frame, since the framer resets to Searching the instant it does) or
/// is silently absorbed as noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceOutcome {
    /// Nothing of note: the run continued, or it ended but produced no
    /// frame and no noise trip.
    Idle,
    /// A run of symbols caused the framer to complete and reset; the
    /// completed frame's bytes (CRC included) are returned for
    /// validation.
    FrameComplete(Vec<u8>),
    /// The noise threshold was exceeded and the framer was reset back to
    /// Searching without completing a frame.
    NoiseReset,
}

/// Stateful symbol slicer. One instance runs for the lifetime of a
/// receiver; it never resets independently of the samples it's fed
/// (unlike the framer, which resets on frame completion or noise).
#[derive(Debug)]
pub struct SymbolSlicer {
    parity: ChannelParity,
    sample_count: u32,
    last_sign: Sign,
    noise_count: u8,
}

impl SymbolSlicer {
    /// Create a new slicer for the given channel parity. `sample_count`
    /// starts at 0 and `last_angle` is implicitly zero, matching the
    /// original source's initialization (the first sample
    /// has no predecessor, so the first comparison is defined to flip and
    /// emit zero symbols).
    pub fn new(parity: ChannelParity) -> Self {
        SymbolSlicer {
            parity,
            sample_count: 0,
            last_sign: Sign::Zero,
            noise_count: 0,
        }
    }

    /// Feed one phase-delta angle (the discriminator's output)
    /// into the slicer, delivering zero or more symbols to `framer` as a
    /// side effect and reporting whatever that produced.
    pub fn feed(&mut self, angle: f32, framer: &mut Framer) -> SliceOutcome {
        let sign = Sign::of(angle);

        // `angle * last_angle > 0` holds exactly when both are nonzero
        // and share a sign.
        let continues_run = sign != Sign::Zero && sign == self.last_sign;

        let mut outcome = SliceOutcome::Idle;

        if continues_run {
            self.sample_count += 1;
            self.noise_count = 0;
        } else {
            let symbol = self.parity.symbol_for(self.last_sign.is_positive());
            let symbol_count = calc_symbol_count(self.sample_count, framer.mode().sps_x100());

            if symbol_count >= 1 {
                for _ in 0..symbol_count {
                    if let Some(frame) = framer.on_symbol(symbol) {
                        outcome = SliceOutcome::FrameComplete(frame);
                    }
                }
            } else if !framer.is_searching() {
                self.noise_count += 1;
                if self.noise_count > NOISE_THRESHOLD {
                    self.noise_count = 0;
                    framer.reset();
                    outcome = SliceOutcome::NoiseReset;
                }
            }
            self.sample_count = 1;
        }

        self.last_sign = sign;
        outcome
    }
}
