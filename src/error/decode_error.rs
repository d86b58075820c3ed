//! The structured decoding failure consumed by the translator.
//!
//! [`DecodeError`] is the contract a decoding engine must fulfill: a
//! discriminant identifying what went wrong, plus a [`CodingPath`] and
//! type/key metadata where the failure can be localized. This crate never
//! constructs these values itself outside its engine adapters; it only
//! translates them.

use thiserror::Error;

use crate::path::CodingPath;

/// A structured decoding failure reported by a decoding engine.
///
/// The enum is `#[non_exhaustive]` because the set of failure kinds belongs
/// to the engine, not to this crate: engines may grow new kinds over time,
/// and consumers must be prepared to handle variants they do not know about.
/// Translation via [`FriendlyError`](crate::FriendlyError) degrades such
/// unknown kinds to [`FriendlyError::Other`](crate::FriendlyError::Other)
/// rather than failing.
///
/// Whether a `null` for a required field is reported as [`ValueMissing`] or
/// as [`TypeMismatch`] is a heuristic of the reporting engine and can differ
/// by target type; the translator passes the engine's verdict through
/// unchanged.
///
/// [`ValueMissing`]: DecodeError::ValueMissing
/// [`TypeMismatch`]: DecodeError::TypeMismatch
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The document has a `null` (or otherwise absent) value where the model
    /// requires one.
    #[error("value of type {expected} missing at {path}")]
    ValueMissing {
        /// Display name of the expected type.
        expected: String,
        /// Where in the document the value was required.
        path: CodingPath,
    },

    /// A key the model requires is not present in the document.
    #[error("key `{key}` not found at {path}")]
    KeyMissing {
        /// Name of the missing key.
        key: String,
        /// The containing value in which the key was looked up.
        path: CodingPath,
    },

    /// The raw input could not be parsed at all.
    ///
    /// No path is available: the engine cannot localize a parse-level
    /// corruption to a document position.
    #[error("data corrupted")]
    DataCorrupted,

    /// The document value's type does not match the model's requirement.
    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        /// Display name of the expected type.
        expected: String,
        /// Where in the document the mismatched value sits.
        path: CodingPath,
    },

    /// A failure the engine could not classify into any of the above kinds.
    #[error("unrecognized decoding failure")]
    Unrecognized,
}
