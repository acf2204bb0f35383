//! # Hex Encoding Utilities
//!
//! The lowercase hex formatter [`crate::emitter`] uses to render accepted
//! frames for stdout.
//!
//! ## Usage
//!
//! ```rust
//! use ea_receiver::util::hex::encode_hex;
//!
//! let data = [0x03, 0x01, 0x02, 0x03];
//! let hex_str = encode_hex(&data);
//! assert_eq!(hex_str, "03010203");
//! ```

/// Encode bytes to a lowercase hex string, with no separators.
///
/// This is the exact format the [`crate::emitter`] writes to stdout for
/// every accepted frame.
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}
