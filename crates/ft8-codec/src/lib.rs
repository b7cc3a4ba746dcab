//! FT8 transmit codec
//!
//! Turns a packed 72-bit payload and a 3-bit message type into the 79 channel tones of an FT8 frame:
//! - components::crc12: CRC-12 checksum and information word layout
//! - components::ldpc: systematic (174,87) LDPC encoder
//! - components::symbol_map: Costas sync insertion and 3-bit tone mapping
//! - encoder: the full pipeline, plus a noiseless verification path

pub mod components;
pub mod encoder;

pub use encoder::{encode_ft8, encode_ft8_checked, verify_ft8, verify_ft8_checked};
