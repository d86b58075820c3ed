//! Coding-path representation for locating values in nested documents.
//!
//! This module provides [`CodingPath`] and [`PathSegment`] for describing
//! where inside a JSON-like document a decoding failure occurred, and for
//! rendering that location as a human-readable string like `.users[0].email`.

use std::fmt::{self, Display};

/// A segment of a coding path.
///
/// Paths are built from segments that represent either field access or array
/// indexing, ordered from the document root down to the failing value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `email`)
    Field(String),
    /// An array index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// An ordered sequence of segments locating a value in a nested document.
///
/// Rendering prefixes every field with a dot and wraps indices in brackets,
/// so a failure three levels deep reads `.children[1].id`. The empty path
/// renders as `"."`, denoting the document root.
///
/// # Example
///
/// ```rust
/// use friendly_decode::CodingPath;
///
/// let path = CodingPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.render(), ".users[0].email");
/// assert_eq!(CodingPath::root().render(), ".");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodingPath {
    segments: Vec<PathSegment>,
}

impl CodingPath {
    /// Creates an empty path representing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Renders this path as a human-readable string.
    ///
    /// Each field segment contributes `.name` and each index segment `[i]`,
    /// concatenated directly with no extra separators. The root path renders
    /// as `"."` so the result is never empty.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<PathSegment> for CodingPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, ".");
        }
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
