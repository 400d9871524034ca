//! Path segment value type and rejoining helpers.

use std::fmt::{self, Write as _};

use crate::pattern::{SEPARATOR, WILDCARD};

/// One component of a tokenized path pattern.
///
/// `text` never contains [`SEPARATOR`] or [`WILDCARD`] and is never empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathSegment {
    /// Literal characters of the segment, trailing marker removed.
    pub text: String,
    /// Whether the segment ended with the wildcard marker.
    pub has_wildcard: bool,
}

impl PathSegment {
    pub fn new(text: impl Into<String>, has_wildcard: bool) -> Self {
        PathSegment {
            text: text.into(),
            has_wildcard,
        }
    }

    /// A segment without a trailing marker.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// A segment with a trailing marker.
    pub fn wildcard(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

/// Writes the segment as it appears in a pattern (`prefix*`).
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.has_wildcard {
            write!(f, "{WILDCARD}")?;
        }
        Ok(())
    }
}

/// Rejoin segments into the pattern they were tokenized from.
pub fn render_pattern(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        let _ = write!(out, "{segment}");
    }
    out
}

/// Rejoin segment text with the separator, dropping wildcard markers.
pub fn join_text(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&segment.text);
    }
    out
}
