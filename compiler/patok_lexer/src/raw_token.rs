//! Raw Token Definitions
//!
//! The logos-derived token enums scanned before the grammar routines in
//! `pattern` and `number` assemble them into values.

use logos::Logos;

/// Raw token of a path pattern.
///
/// The three variants cover every character, so the scanner never fails on
/// well-formed UTF-8 input. `Text` is greedy: two `Text` tokens are never
/// adjacent.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternToken {
    #[token("/")]
    Separator,

    #[token("*")]
    Wildcard,

    #[regex(r"[^/*]+")]
    Text,
}

/// Raw token of a comma-separated integer list.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")] // Whitespace around tokens is insignificant
pub(crate) enum ListToken {
    #[token(",")]
    Comma,

    #[regex(r"[+-]?[0-9]+")]
    Int,
}
