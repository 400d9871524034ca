//! Parse error types.
//!
//! Errors follow a WHERE+WHAT shape:
//! - WHERE: `span` locating the first byte the grammar could not match
//! - WHAT: `kind` describing what went wrong
//!
//! Pattern errors additionally carry a [`PatternFault`] explaining which
//! grammar rule rejected the input. All pattern faults share the single
//! public kind [`ParseErrorKind::MalformedPattern`].

use std::fmt;

use crate::Span;

/// A parse failure with its location in the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError { span, kind }
    }

    pub(crate) fn malformed_pattern(span: Span, fault: PatternFault) -> Self {
        Self::new(span, ParseErrorKind::MalformedPattern(fault))
    }

    /// Returns `true` for errors produced by the pattern tokenizer.
    pub fn is_malformed_pattern(&self) -> bool {
        matches!(self.kind, ParseErrorKind::MalformedPattern(_))
    }

    /// The pattern fault, if this is a pattern error.
    pub fn pattern_fault(&self) -> Option<PatternFault> {
        match self.kind {
            ParseErrorKind::MalformedPattern(fault) => Some(fault),
            _ => None,
        }
    }
}

/// What kind of parse error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// Input does not fully match the path-pattern grammar.
    #[error("malformed pattern: {0}")]
    MalformedPattern(PatternFault),
    /// Input is not a signed decimal integer.
    #[error("invalid integer")]
    InvalidInteger,
    /// Integer literal does not fit in `i32`.
    #[error("integer out of range")]
    IntegerOverflow,
    /// Running sum does not fit in `i64`.
    #[error("sum out of range")]
    SumOverflow,
}

/// Which pattern rule rejected the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PatternFault {
    /// The input is empty.
    EmptyPattern,
    /// A segment has no characters (leading, trailing, or doubled `/`).
    EmptySegment,
    /// A segment is only the wildcard marker.
    BareWildcard,
    /// The wildcard marker is not the last character of its segment.
    MisplacedWildcard,
}

impl PatternFault {
    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            PatternFault::EmptyPattern => "pattern is empty",
            PatternFault::EmptySegment => "empty path segment",
            PatternFault::BareWildcard => "wildcard marker without segment text",
            PatternFault::MisplacedWildcard => {
                "wildcard marker must be the last character of a segment"
            }
        }
    }
}

impl fmt::Display for PatternFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
