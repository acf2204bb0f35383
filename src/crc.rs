//! # CRC-16/CCITT (Kermit)
//!
//! The trailing two bytes of every frame are a CRC-16/CCITT checksum in
//! its Kermit variant: reflected polynomial `0x8408`, initial value
//! `0xFFFF`, final XOR `0xFFFF`, LSB-first bit order, with the 16-bit
//! result appended little-endian.

const POLY: u16 = 0x8408;
const INIT: u16 = 0xFFFF;
const XOR_OUT: u16 = 0xFFFF;

/// Compute the CRC-16/CCITT (Kermit) checksum over `data`.
pub fn crc_ccitt(data: &[u8]) -> u16 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= byte as u16;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }
    crc ^ XOR_OUT
}

/// Validate a complete frame (payload followed by a little-endian CRC-16).
///
/// Returns `true` when `frame`'s last two bytes match the CRC of
/// everything before them. A `frame` shorter than 2 bytes can never be
/// valid and returns `false`.
pub fn validate_crc(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (body, trailer) = frame.split_at(frame.len() - 2);
    let expected = u16::from_le_bytes([trailer[0], trailer[1]]);
    crc_ccitt(body) == expected
}
