//! Path-pattern tokenizer and integer-list parsing.
//!
//! Three entry points, all pure functions over `&str`:
//!
//! - [`tokenize`] splits a pattern such as `home/user/prefix*` into
//!   [`PathSegment`]s, flagging segments that end with the `*` marker.
//! - [`parse_int`] / [`parse_int_with`] parse a signed 32-bit decimal integer.
//! - [`sum_csv`] sums a comma-separated list of integers.
//!
//! Every failure is reported as a [`ParseError`] carrying the byte [`Span`]
//! of the first input the grammar could not match.
//!
//! # Tracing
//!
//! Tokenization emits `tracing` events. Nothing is printed unless the
//! embedding binary installs a subscriber (e.g. `RUST_LOG=patok_lexer=trace`).

mod error;
mod number;
mod parse_helpers;
mod pattern;
mod raw_token;
mod segment;
mod span;

pub use error::{ParseError, ParseErrorKind, PatternFault};
pub use number::{parse_int, parse_int_with, sum_csv};
pub use pattern::{tokenize, SEPARATOR, WILDCARD};
pub use segment::{join_text, render_pattern, PathSegment};
pub use span::Span;
