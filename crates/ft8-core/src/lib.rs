//! Core utilities for the FT8 transmit codec
//!
//! This crate provides the fundamental types and utilities used across the codec:
//! - Protocol dimensions and fixed-size frame types
//! - MessageType (i3) field
//! - BitBuffer for MSB-first bit-level manipulation of fixed-size words
//! - CodecErr for checked entry points
//! - Logging setup

pub mod bitbuffer;
pub mod codec_err;
pub mod debug;
pub mod ft8_common;
pub mod message_type;

// Re-export commonly used items
pub use bitbuffer::BitBuffer;
pub use codec_err::CodecErr;
pub use ft8_common::*;
pub use message_type::MessageType;
