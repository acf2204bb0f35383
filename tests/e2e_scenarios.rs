//! End-to-end scenarios driving the full pipeline from raw cu8 samples
//! through to emitted hex frames, exercising the CRC, Manchester/NRZ
//! demodulation, decimation, and noise-handling behavior together rather
//! than module by module.

use std::io::{self, Cursor};

use ea_receiver::constants::Mode;
use ea_receiver::crc::crc_ccitt;
use ea_receiver::emitter::FrameSink;
use ea_receiver::receiver::Receiver;

#[derive(Default)]
struct VecSink {
    frames: Vec<Vec<u8>>,
}

impl FrameSink for VecSink {
    fn emit(&mut self, frame: &[u8]) -> io::Result<()> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

const DELTA: f32 = 0.3;

fn to_byte(component: f32) -> u8 {
    (component * 127.0 + 127.0).round().clamp(0.0, 255.0) as u8
}

/// Push `count` samples onto `out`, advancing `phase` by `+DELTA` (bit 1)
/// or `-DELTA` (bit 0) per sample, so the discriminator recovers exactly
/// `+-DELTA` at every sample regardless of accumulated phase. Keeping one
/// running `phase` across every call in a stream avoids any artificial
/// discontinuity between runs.
fn push_run(out: &mut Vec<u8>, phase: &mut f32, bit: u8, count: usize) {
    let step = if bit == 1 { DELTA } else { -DELTA };
    for _ in 0..count {
        *phase += step;
        out.push(to_byte(phase.cos()));
        out.push(to_byte(phase.sin()));
    }
}

/// Raw bit sequence for one frame: preamble as-is, then `bytes` (the
/// plaintext length/payload/CRC, *before* whitening) XORed with the
/// mode's `xor_key` byte-by-byte to get the bytes actually modulated onto
/// the wire, each repeated `bit_repeat` times per bit (2 for Mode 1's
/// Manchester coding, 1 for Mode 2's NRZ). `Framer::accumulate_bit`
/// de-whitens every completed byte on the way in, so the wire bytes must
/// be the XORed form, not the plaintext.
fn bits_for(mode: Mode, bytes: &[u8], bit_repeat: usize) -> Vec<u8> {
    let mut bits = Vec::new();
    for i in (0..64).rev() {
        bits.push(((mode.preamble() >> i) & 1) as u8);
    }
    for &byte in bytes {
        let whitened = byte ^ mode.xor_key();
        for i in (0..8).rev() {
            let bit = (whitened >> i) & 1;
            for _ in 0..bit_repeat {
                bits.push(bit);
            }
        }
    }
    bits
}

/// Render a full bit sequence into cu8 samples, `samples_per_bit` samples
/// per bit, with one trailing single-sample reversal to flush the final
/// run instead of stranding it at EOF.
fn samples_for_bits(bits: &[u8], samples_per_bit: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut phase: f32 = 0.0;
    for &bit in bits {
        push_run(&mut out, &mut phase, bit, samples_per_bit);
    }
    let last_bit = *bits.last().expect("non-empty bit sequence");
    push_run(&mut out, &mut phase, 1 - last_bit, 1);
    out
}

/// A small xorshift PRNG, used only to generate deterministic "noise"
/// bytes for the decimation scenario below — no claim of cryptographic
/// or statistical quality is made or needed.
struct Xorshift32(u32);

impl Xorshift32 {
    fn next_u8(&mut self) -> u8 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        (self.0 & 0xFF) as u8
    }
}

fn mode1_plaintext(payload: &[u8]) -> Vec<u8> {
    let mut plaintext = vec![payload.len() as u8];
    plaintext.extend_from_slice(payload);
    let crc = crc_ccitt(&plaintext);
    plaintext.extend_from_slice(&crc.to_le_bytes());
    plaintext
}

#[test]
fn s1_crc_vectors_round_trip() {
    assert_eq!(crc_ccitt(&[]), 0xFFFF ^ 0xFFFF);

    let v1 = crc_ccitt(&[0x00]);
    let lo = (v1 & 0xFF) as u8;
    let hi = (v1 >> 8) as u8;
    let crc_of_extended = crc_ccitt(&[0x00, lo, hi]);
    let extended_crc_le = crc_of_extended.to_le_bytes();

    let mut frame = vec![0x00, lo, hi];
    frame.extend_from_slice(&extended_crc_le);
    assert!(ea_receiver::crc::validate_crc(&frame));
}

#[test]
fn s2_mode1_synthetic_frame_is_emitted_as_plaintext() {
    let plaintext = mode1_plaintext(&[0x01, 0x02, 0x03]);

    let bits = bits_for(Mode::Mode1, &plaintext, 2);
    let samples = samples_for_bits(&bits, 11);

    let mut receiver = Receiver::new(1);
    let mut sink = VecSink::default();
    receiver.run(Cursor::new(samples), &mut sink).unwrap();

    assert_eq!(sink.frames, vec![plaintext]);
}

#[test]
fn s3_mode2_synthetic_frame_is_emitted_as_plaintext() {
    let payload = [0xAAu8, 0xBB, 0xCC, 0xDD, 0xEE];
    let len = payload.len() as u16;
    let mut plaintext = vec![(len >> 8) as u8, (len & 0xFF) as u8];
    plaintext.extend_from_slice(&payload);
    let crc = crc_ccitt(&plaintext);
    plaintext.extend_from_slice(&crc.to_le_bytes());

    let bits = bits_for(Mode::Mode2, &plaintext, 1);
    let samples = samples_for_bits(&bits, 3);

    let mut receiver = Receiver::new(1);
    let mut sink = VecSink::default();
    receiver.run(Cursor::new(samples), &mut sink).unwrap();

    assert_eq!(sink.frames, vec![plaintext]);
}

#[test]
fn s4_corrupted_payload_is_dropped_and_framer_recovers() {
    let plaintext = mode1_plaintext(&[0x01, 0x02, 0x03]);
    let mut corrupted = plaintext.clone();
    corrupted[2] ^= 0x01; // flip a bit in the payload, after the CRC was computed

    let bits = bits_for(Mode::Mode1, &corrupted, 2);
    let samples = samples_for_bits(&bits, 11);

    let mut receiver = Receiver::new(1);
    let mut sink = VecSink::default();
    receiver.run(Cursor::new(samples), &mut sink).unwrap();

    assert!(sink.frames.is_empty());
    assert_eq!(receiver.stats().frames_rejected, 1);
}

#[test]
fn s5_channel_decimation_recovers_same_frame_as_single_channel() {
    let plaintext = mode1_plaintext(&[0x01, 0x02, 0x03]);

    let bits = bits_for(Mode::Mode1, &plaintext, 2);
    let real_samples = samples_for_bits(&bits, 11);
    let real_pairs: Vec<(u8, u8)> = real_samples
        .chunks_exact(2)
        .map(|c| (c[0], c[1]))
        .collect();

    let mut noise = Xorshift32(0xC0FFEE);
    let mut interleaved = Vec::with_capacity(real_pairs.len() * 6 * 2);
    for (i, q) in real_pairs {
        interleaved.push(i);
        interleaved.push(q);
        for _ in 0..5 {
            interleaved.push(noise.next_u8());
            interleaved.push(noise.next_u8());
        }
    }

    let mut receiver = Receiver::new(6);
    let mut sink = VecSink::default();
    receiver.run(Cursor::new(interleaved), &mut sink).unwrap();

    assert_eq!(sink.frames, vec![plaintext]);
}

#[test]
fn s6_noise_trip_is_survived_and_a_later_clean_frame_still_decodes() {
    let plaintext = mode1_plaintext(&[0x07, 0x08, 0x09]);

    let mut samples = Vec::new();
    let mut phase: f32 = 0.0;

    // Preamble only, landing the framer in ReceivingLength.
    for i in (0..64).rev() {
        let bit = ((Mode::Mode1.preamble() >> i) & 1) as u8;
        push_run(&mut samples, &mut phase, bit, 11);
    }

    // 8 single-sample runs, alternating every sample: each is a 1-sample
    // run, which rounds down to zero symbols at Mode 1's 11.25
    // samples/symbol, so every transition between them increments the
    // noise counter. 7 consecutive zero-symbol transitions exceed the
    // threshold of 5.
    for i in 0..8u8 {
        push_run(&mut samples, &mut phase, i % 2, 1);
    }

    // A complete, clean frame afterward, continuing the same phase so
    // there's no artificial discontinuity in the sample stream.
    let clean_bits = bits_for(Mode::Mode1, &plaintext, 2);
    for &bit in &clean_bits {
        push_run(&mut samples, &mut phase, bit, 11);
    }
    push_run(&mut samples, &mut phase, 1 - clean_bits[clean_bits.len() - 1], 1);

    let mut receiver = Receiver::new(1);
    let mut sink = VecSink::default();
    receiver.run(Cursor::new(samples), &mut sink).unwrap();

    assert_eq!(sink.frames, vec![plaintext]);
    assert!(receiver.stats().noise_resets >= 1);
}
