//! Adapters wiring concrete decoding engines to the translator.
//!
//! The translator itself is engine-agnostic; this module provides the
//! bundled `serde_json` adapter.

pub mod serde_json;

pub use serde_json::{from_json_slice, from_json_str, to_decode_error};
