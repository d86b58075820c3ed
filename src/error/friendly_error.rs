//! The friendly error surface and the translation from [`DecodeError`].

use thiserror::Error;

use crate::error::DecodeError;

/// A decoding failure translated into one of five human-friendly variants.
///
/// Every variant except [`CorruptedData`] and [`Other`] carries the rendered
/// path to the failing value. The path is never empty: a failure at the
/// document root renders as `"."`.
///
/// Callers are expected to match on the variant and surface the `key`,
/// `type_name`/`expected` and `path` fields however suits their UI; the
/// `Display` impl provides a reasonable default message.
///
/// # Example
///
/// ```rust
/// use friendly_decode::{CodingPath, DecodeError, FriendlyError};
///
/// let raw = DecodeError::TypeMismatch {
///     expected: "i64".to_string(),
///     path: CodingPath::root().push_field("children").push_index(1).push_field("id"),
/// };
///
/// let friendly = FriendlyError::from_decode(raw);
/// assert_eq!(
///     friendly,
///     FriendlyError::TypeMismatch {
///         expected: "i64".to_string(),
///         path: ".children[1].id".to_string(),
///     }
/// );
/// ```
///
/// [`CorruptedData`]: FriendlyError::CorruptedData
/// [`Other`]: FriendlyError::Other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendlyError {
    /// The model has a required property, but the document has a `null`
    /// value for it.
    ///
    /// Whether a `null` surfaces here or as [`TypeMismatch`] depends on the
    /// decoding engine's own reporting, which can vary by target type.
    ///
    /// [`TypeMismatch`]: FriendlyError::TypeMismatch
    #[error("missing value of type {type_name} at {path}")]
    MissingValue {
        /// Display name of the expected type of the missing value.
        type_name: String,
        /// Rendered path to the property in the document.
        path: String,
    },

    /// A required property of the model is not present in the document.
    #[error("key `{key}` not found at {path}")]
    KeyNotFound {
        /// Name of the absent property.
        key: String,
        /// Rendered path to the value that should contain the key.
        path: String,
    },

    /// The raw input could not be parsed at all. No location is available.
    #[error("the data could not be parsed")]
    CorruptedData,

    /// The document value's type does not match the model's requirement.
    #[error("expected {expected} at {path}")]
    TypeMismatch {
        /// Display name of the type the model requires.
        expected: String,
        /// Rendered path to the mismatched value.
        path: String,
    },

    /// An unknown decoding failure occurred.
    #[error("an unknown decoding failure occurred")]
    Other,
}

impl FriendlyError {
    /// Translates a structured [`DecodeError`] into its friendly variant.
    ///
    /// Total over any input: each known kind maps to exactly one variant,
    /// and anything else degrades to [`FriendlyError::Other`]. The mapping
    /// adds no inference of its own; in particular the missing-value versus
    /// type-mismatch boundary is whatever the engine reported.
    pub fn from_decode(err: DecodeError) -> Self {
        match err {
            DecodeError::ValueMissing { expected, path } => FriendlyError::MissingValue {
                type_name: expected,
                path: path.render(),
            },
            DecodeError::KeyMissing { key, path } => FriendlyError::KeyNotFound {
                key,
                path: path.render(),
            },
            DecodeError::DataCorrupted => FriendlyError::CorruptedData,
            DecodeError::TypeMismatch { expected, path } => FriendlyError::TypeMismatch {
                expected,
                path: path.render(),
            },
            other => {
                debug_assert!(
                    matches!(other, DecodeError::Unrecognized),
                    "DecodeError gained a kind that is not handled yet: {other:?}"
                );
                FriendlyError::Other
            }
        }
    }
}

impl From<DecodeError> for FriendlyError {
    fn from(err: DecodeError) -> Self {
        FriendlyError::from_decode(err)
    }
}

/// Extension trait surfacing the translation as a method on the raw error.
///
/// This is the adapter entry point callers are expected to reach for:
///
/// ```rust
/// use friendly_decode::{DecodeError, FriendlyDecodeExt, FriendlyError};
///
/// let raw = DecodeError::DataCorrupted;
/// assert_eq!(raw.friendly_error(), FriendlyError::CorruptedData);
/// ```
pub trait FriendlyDecodeExt {
    /// Returns the friendly rendition of this decoding failure.
    fn friendly_error(&self) -> FriendlyError;
}

impl FriendlyDecodeExt for DecodeError {
    fn friendly_error(&self) -> FriendlyError {
        FriendlyError::from_decode(self.clone())
    }
}
