//! # Framer
//!
//! A three-state bit-stream state machine: [`FramerState::Searching`] for
//! the 64-bit preamble + syncword, [`FramerState::ReceivingLength`] for the
//! mode-specific length field, and [`FramerState::ReceivingBody`] for the
//! de-whitened payload and trailing CRC. All state that the original
//! implementation kept as function-local `static` variables (retained
//! between calls) is gathered here into one explicit, owned struct, so the
//! framer is an object-with-state receiving bits and yielding zero-or-one
//! frame events rather than hidden global mutation.

use crate::constants::{Mode, MAX_FRAME_LEN};

/// The framer's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FramerState {
    Searching,
    ReceivingLength,
    ReceivingBody,
}

/// Bit-to-byte assembler and frame synchronizer for both EnergyAxis
/// modulations.
#[derive(Debug)]
pub struct Framer {
    state: FramerState,
    mode: Mode,
    bit_pos: u8,
    byte_pos: usize,
    toggle: bool,
    msg_len: usize,
    xor_key: u8,
    /// Last 64 bits received, shifted in LSB-first; only meaningful while
    /// `state == Searching`. Deliberately *not* cleared by [`Self::reset`]
    /// a reset mid-capture must not erase
    /// context that might already be most of the way into the next
    /// preamble.
    history: u64,
    buffer: Vec<u8>,
}

impl Framer {
    /// Construct a new framer in the initial `Searching`/Mode 1 state
    /// with an empty history register.
    pub fn new() -> Self {
        Framer {
            state: FramerState::Searching,
            mode: Mode::Mode1,
            bit_pos: 0,
            byte_pos: 0,
            toggle: true,
            msg_len: 0,
            xor_key: Mode::Mode1.xor_key(),
            history: 0,
            buffer: vec![0u8; MAX_FRAME_LEN],
        }
    }

    /// Whether the framer is currently searching for a preamble.
    pub fn is_searching(&self) -> bool {
        self.state == FramerState::Searching
    }

    /// The modulation currently being demodulated (meaningless while
    /// `is_searching()`, but always Mode 1 in that case since `reset`
    /// restores it).
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Reset to (Searching, Mode 1, bit_pos=0, byte_pos=0), leaving
    /// `history` untouched. Called unconditionally after any frame
    /// emission and by [`crate::slicer::SymbolSlicer`] when
    /// the noise threshold trips.
    pub fn reset(&mut self) {
        self.state = FramerState::Searching;
        self.mode = Mode::Mode1;
        self.bit_pos = 0;
        self.byte_pos = 0;
    }

    /// Feed one demodulated bit into the framer.
    ///
    /// Returns `Some(frame_bytes)` — `msg_len` bytes including the
    /// trailing 2-byte CRC — exactly when a frame body completes. The
    /// framer resets itself to Searching/Mode 1 before returning, whether
    /// or not the caller goes on to validate the CRC
    /// "reset to Searching/Mode 1 unconditionally").
    pub fn on_symbol(&mut self, bit: u8) -> Option<Vec<u8>> {
        match self.state {
            FramerState::Searching => {
                self.history = (self.history << 1) | (bit as u64 & 1);
                if self.history == Mode::Mode1.preamble() {
                    self.enter_receiving_length(Mode::Mode1);
                } else if self.history == Mode::Mode2.preamble() {
                    self.enter_receiving_length(Mode::Mode2);
                }
                None
            }
            FramerState::ReceivingLength => {
                self.receive_length_bit(bit);
                None
            }
            FramerState::ReceivingBody => self.receive_body_bit(bit),
        }
    }

    fn enter_receiving_length(&mut self, mode: Mode) {
        self.mode = mode;
        self.state = FramerState::ReceivingLength;
        self.bit_pos = 0;
        self.byte_pos = 0;
        self.toggle = true;
        self.msg_len = 0;
        self.xor_key = mode.xor_key();
    }

    /// Manchester gate (Mode 1 only consumes every second bit) shared by
    /// both receiving states. Returns `true` exactly when this call
    /// completed a byte (bit_pos reached 8).
    fn accumulate_bit(&mut self, bit: u8) -> bool {
        if self.mode == Mode::Mode1 && !self.toggle {
            self.toggle = !self.toggle;
            return false;
        }

        self.buffer[self.byte_pos] = (self.buffer[self.byte_pos] << 1) | (bit & 1);
        self.bit_pos += 1;

        let byte_done = if self.bit_pos == 8 {
            self.buffer[self.byte_pos] ^= self.xor_key;
            self.bit_pos = 0;
            true
        } else {
            false
        };

        self.toggle = !self.toggle;
        byte_done
    }

    fn receive_length_bit(&mut self, bit: u8) {
        if !self.accumulate_bit(bit) {
            return;
        }

        match self.mode {
            Mode::Mode1 => {
                self.msg_len = self.buffer[0] as usize + 2;
                self.state = FramerState::ReceivingBody;
                self.byte_pos += 1;
            }
            Mode::Mode2 => {
                if self.byte_pos == 1 {
                    self.msg_len =
                        ((self.buffer[0] as usize) << 8 | self.buffer[1] as usize) + 2;
                    self.state = FramerState::ReceivingBody;
                }
                self.byte_pos += 1;
            }
        }
    }

    fn receive_body_bit(&mut self, bit: u8) -> Option<Vec<u8>> {
        if !self.accumulate_bit(bit) {
            return None;
        }

        self.byte_pos += 1;
        if self.byte_pos == self.msg_len {
            let frame = self.buffer[..self.msg_len].to_vec();
            self.reset();
            Some(frame)
        } else {
            None
        }
    }
}

impl Default for Framer {
    fn default() -> Self {
        Self::new()
    }
}
