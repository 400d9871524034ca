//! Integer and integer-list parsing.
//!
//! `int := [+-]?[0-9]+`, range `i32`. [`parse_int`] takes the literal with no
//! surrounding whitespace; [`sum_csv`] parses `int (',' int)*` and skips
//! whitespace between tokens.

use std::ops::Range;

use logos::Logos;
use tracing::{debug, trace};

use crate::parse_helpers::{parse_decimal_i32, IntLiteralError};
use crate::raw_token::ListToken;
use crate::{ParseError, ParseErrorKind, Span};

/// Parse a signed decimal integer.
///
/// # Errors
///
/// - [`ParseErrorKind::InvalidInteger`] if `input` is not entirely
///   `[+-]?[0-9]+`; the span starts at the first offending byte.
/// - [`ParseErrorKind::IntegerOverflow`] if the value does not fit in `i32`.
pub fn parse_int(input: &str) -> Result<i32, ParseError> {
    parse_decimal_i32(input).map_err(|err| literal_error(err, 0..input.len()))
}

/// Parse a signed decimal integer and hand it to `action`.
///
/// `action` runs once on success and never on failure. The parsed value is
/// also returned.
///
/// ```
/// let mut seen = Vec::new();
/// patok_lexer::parse_int_with("1024", |n| seen.push(n)).unwrap();
/// assert_eq!(seen, [1024]);
/// ```
pub fn parse_int_with<F>(input: &str, action: F) -> Result<i32, ParseError>
where
    F: FnOnce(i32),
{
    let value = parse_int(input)?;
    action(value);
    Ok(value)
}

/// Sum a comma-separated list of integers such as `"1, 2, 3"`.
///
/// Whitespace (space, tab, CR, LF) around integers and commas is ignored.
/// Each item follows the [`parse_int`] grammar; the sum is accumulated in
/// `i64`.
///
/// # Errors
///
/// - [`ParseErrorKind::InvalidInteger`] for an empty list, a missing item
///   (`"1,"`, `",1"`, `"1,,2"`), two items without a comma, or a stray
///   character.
/// - [`ParseErrorKind::IntegerOverflow`] for an item outside `i32`.
/// - [`ParseErrorKind::SumOverflow`] if the running sum leaves `i64`.
pub fn sum_csv(input: &str) -> Result<i64, ParseError> {
    let mut lexer = ListToken::lexer(input);
    let end = input.len()..input.len();
    let mut total: i64 = 0;

    loop {
        // Item
        match lexer.next() {
            Some(Ok(ListToken::Int)) => {
                let range = lexer.span();
                let value = parse_decimal_i32(lexer.slice())
                    .map_err(|err| literal_error(err, range.clone()))?;
                total = total.checked_add(i64::from(value)).ok_or_else(|| {
                    ParseError::new(
                        Span::saturating_from_range(range),
                        ParseErrorKind::SumOverflow,
                    )
                })?;
                trace!(value, total, "list item");
            }
            Some(Ok(ListToken::Comma) | Err(())) => return Err(invalid_integer(lexer.span())),
            None => return Err(invalid_integer(end)),
        }

        // Separator or end of list
        match lexer.next() {
            None => break,
            Some(Ok(ListToken::Comma)) => {}
            Some(Ok(ListToken::Int) | Err(())) => return Err(invalid_integer(lexer.span())),
        }
    }

    debug!(total, "summed integer list");
    Ok(total)
}

fn invalid_integer(range: Range<usize>) -> ParseError {
    ParseError::new(
        Span::saturating_from_range(range),
        ParseErrorKind::InvalidInteger,
    )
}

/// Map a literal error to a `ParseError` located within `literal`.
fn literal_error(err: IntLiteralError, literal: Range<usize>) -> ParseError {
    match err {
        IntLiteralError::Invalid(offset) => invalid_integer(literal.start + offset..literal.end),
        IntLiteralError::Overflow => ParseError::new(
            Span::saturating_from_range(literal),
            ParseErrorKind::IntegerOverflow,
        ),
    }
}

#[cfg(test)]
mod tests;
