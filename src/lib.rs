//! # friendly-decode
//!
//! Translates low-level structured-decoding failures into a small, closed
//! set of human-friendly error variants, each carrying a readable path to
//! the failing value inside the document.
//!
//! ## Overview
//!
//! Decoding engines report failures in terms a developer understands; end
//! users and logs want something shorter. This crate maps the engine's
//! structured report ([`DecodeError`]) onto five variants
//! ([`FriendlyError`]) and renders the failure location as a dot path like
//! `.children[1].id`.
//!
//! ## Core Types
//!
//! - [`CodingPath`] / [`PathSegment`]: location of a value in a nested
//!   document, rendered as `.field` and `[index]` tokens
//! - [`DecodeError`]: the structured failure a decoding engine reports
//! - [`FriendlyError`]: the translated, display-ready variant
//! - [`FriendlyDecodeExt`]: `.friendly_error()` on a raw failure
//!
//! ## Example
//!
//! ```rust
//! use friendly_decode::{interop::from_json_str, FriendlyError};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Model {
//!     thing: i64,
//! }
//!
//! let err = from_json_str::<Model>(r#"{"other": true}"#).unwrap_err();
//! assert_eq!(
//!     err,
//!     FriendlyError::KeyNotFound {
//!         key: "thing".to_string(),
//!         path: ".".to_string(),
//!     }
//! );
//! ```

pub mod error;
pub mod interop;
pub mod path;

pub use error::{DecodeError, FriendlyDecodeExt, FriendlyError};
pub use path::{CodingPath, PathSegment};
