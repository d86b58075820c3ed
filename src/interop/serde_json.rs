//! Decoding-engine adapter for `serde_json`.
//!
//! This module wires a real engine to the translator: it deserializes with
//! path tracking (via `serde_path_to_error`) and classifies the resulting
//! `serde_json` failure into a [`DecodeError`], which then translates into a
//! [`FriendlyError`].
//!
//! Classification of data errors goes by the engine's own report, so the
//! boundary between "missing value" and "type mismatch" is whatever serde
//! decides for the target type. A `null` where a value is required is
//! reported here as [`DecodeError::ValueMissing`]; other engines draw that
//! line differently for some types.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_path_to_error::Segment;

use crate::error::{DecodeError, FriendlyError};
use crate::path::{CodingPath, PathSegment};

// serde_json appends the input position to every message.
static LOCATION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" at line \d+ column \d+$").unwrap());

static MISSING_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^missing field `(.+)`$").unwrap());

static NULL_FOR_REQUIRED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^invalid type: null, expected (.+)$").unwrap());

static WRONG_TYPE_OR_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^invalid (?:type|value): .*, expected (.+)$").unwrap());

/// Deserializes a JSON string, reporting failures as [`FriendlyError`].
///
/// # Example
///
/// ```rust
/// use friendly_decode::{interop::from_json_str, FriendlyError};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Model {
///     thing: i64,
/// }
///
/// let err = from_json_str::<Model>(r#"{"thing": "value"}"#).unwrap_err();
/// assert_eq!(
///     err,
///     FriendlyError::TypeMismatch {
///         expected: "i64".to_string(),
///         path: ".thing".to_string(),
///     }
/// );
/// ```
pub fn from_json_str<T: DeserializeOwned>(src: &str) -> Result<T, FriendlyError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize(de).map_err(|err| to_decode_error(err).into())
}

/// Deserializes JSON bytes, reporting failures as [`FriendlyError`].
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FriendlyError> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(de).map_err(|err| to_decode_error(err).into())
}

/// Classifies a path-tracked `serde_json` failure into a [`DecodeError`].
///
/// Syntax-level failures (malformed JSON, truncated input, I/O) become
/// [`DecodeError::DataCorrupted`] with no path. Data-level failures are
/// classified by the engine's message; shapes this adapter does not know
/// become [`DecodeError::Unrecognized`].
pub fn to_decode_error(err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let path = coding_path(err.path());
    let inner = err.into_inner();

    match inner.classify() {
        Category::Syntax | Category::Eof | Category::Io => DecodeError::DataCorrupted,
        Category::Data => {
            let message = inner.to_string();
            let message = LOCATION_SUFFIX.replace(&message, "");
            classify_data_error(&message, path)
        }
    }
}

fn classify_data_error(message: &str, path: CodingPath) -> DecodeError {
    if let Some(captures) = MISSING_FIELD.captures(message) {
        return DecodeError::KeyMissing {
            key: captures[1].to_string(),
            path,
        };
    }
    if let Some(captures) = NULL_FOR_REQUIRED.captures(message) {
        return DecodeError::ValueMissing {
            expected: captures[1].to_string(),
            path,
        };
    }
    if let Some(captures) = WRONG_TYPE_OR_VALUE.captures(message) {
        return DecodeError::TypeMismatch {
            expected: captures[1].to_string(),
            path,
        };
    }
    DecodeError::Unrecognized
}

fn coding_path(path: &serde_path_to_error::Path) -> CodingPath {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(PathSegment::field(key.clone())),
            Segment::Seq { index } => Some(PathSegment::index(*index)),
            Segment::Enum { variant } => Some(PathSegment::field(variant.clone())),
            Segment::Unknown => None,
        })
        .collect()
}
