//! Exercises reading samples from an actual file on disk rather than an
//! in-memory cursor, the same path `main`'s non-stdin branch takes.

use std::fs::File;
use std::io::{self, Write};

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

/// `plaintext` is the decoded length/payload/CRC; the wire carries it
/// whitened with Mode 1's XOR key, since `Framer::accumulate_bit`
/// de-whitens every completed byte on the way in.
fn samples_for_mode1_frame(plaintext: &[u8]) -> Vec<u8> {
    let mut bits = Vec::new();
    for i in (0..64).rev() {
        bits.push(((Mode::Mode1.preamble() >> i) & 1) as u8);
    }
    for &byte in plaintext {
        let whitened = byte ^ Mode::Mode1.xor_key();
        for i in (0..8).rev() {
            let bit = (whitened >> i) & 1;
            bits.push(bit);
            bits.push(bit);
        }
    }

    let mut out = Vec::new();
    let mut phase: f32 = 0.0;
    let mut last_step = DELTA;
    for &bit in &bits {
        let step = if bit == 1 { DELTA } else { -DELTA };
        last_step = step;
        for _ in 0..11 {
            phase += step;
            out.push(to_byte(phase.cos()));
            out.push(to_byte(phase.sin()));
        }
    }
    phase -= last_step;
    out.push(to_byte(phase.cos()));
    out.push(to_byte(phase.sin()));
    out
}

#[test]
fn receiver_decodes_a_frame_read_from_a_real_file() {
    let mut plaintext = vec![2u8, 0x11, 0x22];
    let crc = crc_ccitt(&plaintext);
    plaintext.extend_from_slice(&crc.to_le_bytes());

    let samples = samples_for_mode1_frame(&plaintext);

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("capture.cu8");
    {
        let mut file = File::create(&path).expect("create capture file");
        file.write_all(&samples).expect("write capture samples");
    }

    let file = File::open(&path).expect("open capture file");
    let mut receiver = Receiver::new(1);
    let mut sink = VecSink::default();
    receiver.run(file, &mut sink).unwrap();

    assert_eq!(sink.frames, vec![plaintext]);
}
