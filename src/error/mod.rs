//! Error types for decoding failures.
//!
//! This module provides [`DecodeError`], the structured failure a decoding
//! engine reports, and [`FriendlyError`], the human-friendly translation of
//! that failure.

mod decode_error;
mod friendly_error;

pub use decode_error::DecodeError;
pub use friendly_error::{FriendlyDecodeExt, FriendlyError};
