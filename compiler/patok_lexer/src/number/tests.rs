#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::cell::Cell;

fn error_of<T: std::fmt::Debug>(result: Result<T, ParseError>) -> (ParseErrorKind, Span) {
    let err = result.expect_err("input should be rejected");
    (err.kind, err.span)
}

// === parse_int ===

#[test]
fn parse_int_samples() {
    assert_eq!(parse_int("123"), Ok(123));
    assert_eq!(parse_int("-123"), Ok(-123));
    assert_eq!(parse_int("+5"), Ok(5));
}

#[test]
fn parse_int_rejects_text() {
    assert_eq!(
        error_of(parse_int("abc-123")),
        (ParseErrorKind::InvalidInteger, Span::new(0, 7))
    );
}

#[test]
fn parse_int_requires_full_match() {
    assert_eq!(
        error_of(parse_int("12abc")),
        (ParseErrorKind::InvalidInteger, Span::new(2, 5))
    );
    assert_eq!(
        error_of(parse_int("12 ")),
        (ParseErrorKind::InvalidInteger, Span::new(2, 3))
    );
}

#[test]
fn parse_int_rejects_empty_and_sign_only() {
    assert_eq!(
        error_of(parse_int("")),
        (ParseErrorKind::InvalidInteger, Span::point(0))
    );
    assert_eq!(
        error_of(parse_int("-")),
        (ParseErrorKind::InvalidInteger, Span::point(1))
    );
}

#[test]
fn parse_int_overflow() {
    assert_eq!(
        error_of(parse_int("2147483648")),
        (ParseErrorKind::IntegerOverflow, Span::new(0, 10))
    );
    assert_eq!(parse_int("-2147483648"), Ok(i32::MIN));
}

// === parse_int_with ===

#[test]
fn action_runs_once_on_success() {
    let calls = Cell::new(0);
    let seen = Cell::new(0);
    let value = parse_int_with("1024", |n| {
        calls.set(calls.get() + 1);
        seen.set(n);
    })
    .unwrap();
    assert_eq!(value, 1024);
    assert_eq!(seen.get(), 1024);
    assert_eq!(calls.get(), 1);
}

#[test]
fn action_skipped_on_failure() {
    let called = Cell::new(false);
    let result = parse_int_with("abc", |_| called.set(true));
    assert!(result.is_err());
    assert!(!called.get());
}

// === sum_csv ===

#[test]
fn sum_with_spaces() {
    assert_eq!(sum_csv("1, 2, 3"), Ok(6));
}

#[test]
fn sum_without_spaces() {
    assert_eq!(sum_csv("1,2,3"), Ok(6));
}

#[test]
fn sum_single_and_signed() {
    assert_eq!(sum_csv("42"), Ok(42));
    assert_eq!(sum_csv(" -5 ,\t+10\n"), Ok(5));
}

#[test]
fn sum_exceeds_i32() {
    assert_eq!(
        sum_csv("2147483647, 2147483647"),
        Ok(2 * i64::from(i32::MAX))
    );
}

#[test]
fn sum_rejects_empty() {
    assert_eq!(
        error_of(sum_csv("")),
        (ParseErrorKind::InvalidInteger, Span::point(0))
    );
    assert_eq!(
        error_of(sum_csv("   ")),
        (ParseErrorKind::InvalidInteger, Span::point(3))
    );
}

#[test]
fn sum_rejects_missing_items() {
    assert_eq!(
        error_of(sum_csv("1,")),
        (ParseErrorKind::InvalidInteger, Span::point(2))
    );
    assert_eq!(
        error_of(sum_csv(",1")),
        (ParseErrorKind::InvalidInteger, Span::new(0, 1))
    );
    assert_eq!(
        error_of(sum_csv("1,,2")),
        (ParseErrorKind::InvalidInteger, Span::new(2, 3))
    );
}

#[test]
fn sum_rejects_missing_comma() {
    assert_eq!(
        error_of(sum_csv("1 2")),
        (ParseErrorKind::InvalidInteger, Span::new(2, 3))
    );
}

#[test]
fn sum_rejects_stray_character() {
    assert_eq!(
        error_of(sum_csv("1, x")),
        (ParseErrorKind::InvalidInteger, Span::new(3, 4))
    );
}

#[test]
fn sum_rejects_item_overflow() {
    assert_eq!(
        error_of(sum_csv("1, 2147483648")),
        (ParseErrorKind::IntegerOverflow, Span::new(3, 13))
    );
}
