//! # Utility Modules
//!
//! Common helpers shared across the receiver pipeline: hex formatting for
//! emitted frames and debug output, and rate-limited logging for noisy
//! protocol events.

pub mod hex;
pub mod logging;

pub use hex::encode_hex;
pub use logging::LogThrottle;
