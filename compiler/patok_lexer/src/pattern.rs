//! Path-pattern tokenizer.
//!
//! Grammar (no whitespace skipping, whole input must match):
//!
//! ```text
//! pattern := segment ('/' segment)*
//! segment := text '*'?
//! text    := [^/*]+
//! ```
//!
//! The raw scanner (`PatternToken`) classifies every character; this module
//! walks the token list with one token of lookahead and never backtracks.

use logos::Logos;
use tracing::{debug, trace};

use crate::raw_token::PatternToken;
use crate::{ParseError, PathSegment, PatternFault, Span};

/// Character delimiting path segments.
pub const SEPARATOR: char = '/';

/// Character marking a segment as a prefix wildcard when it ends the segment.
pub const WILDCARD: char = '*';

/// Split `pattern` into path segments.
///
/// Each segment is the literal text between separators; a trailing `*` is
/// stripped and recorded in [`PathSegment::has_wildcard`].
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedPattern`](crate::ParseErrorKind::MalformedPattern)
/// when the input is empty, has an empty segment (`/`, `a//b`, `a/`), has a
/// segment that is only `*`, or has a `*` anywhere but at the end of a
/// segment. The error span starts at the first byte that did not match.
///
/// # Example
///
/// ```
/// use patok_lexer::{tokenize, PathSegment};
///
/// let segments = tokenize("home/user/prefix*").unwrap();
/// assert_eq!(
///     segments,
///     vec![
///         PathSegment::literal("home"),
///         PathSegment::literal("user"),
///         PathSegment::wildcard("prefix"),
///     ]
/// );
/// ```
pub fn tokenize(pattern: &str) -> Result<Vec<PathSegment>, ParseError> {
    let mut parser = PatternParser::new(pattern);
    match parser.pattern() {
        Ok(segments) => {
            debug!(segments = segments.len(), "tokenized pattern");
            Ok(segments)
        }
        Err(err) => {
            debug!(%err, "rejected pattern");
            Err(err)
        }
    }
}

/// A scanned token with its source text.
#[derive(Clone, Copy, Debug)]
struct Lexeme<'src> {
    kind: PatternToken,
    text: &'src str,
    span: Span,
}

struct PatternParser<'src> {
    lexemes: Vec<Lexeme<'src>>,
    pos: usize,
    end: Span,
}

impl<'src> PatternParser<'src> {
    fn new(source: &'src str) -> Self {
        let mut lexer = PatternToken::lexer(source);
        let mut lexemes = Vec::new();
        while let Some(result) = lexer.next() {
            // `PatternToken` covers every character of a `&str`, so the
            // scanner has no error case to report.
            debug_assert!(result.is_ok(), "unclassified input {:?}", lexer.slice());
            let Ok(kind) = result else {
                continue;
            };
            let lexeme = Lexeme {
                kind,
                text: lexer.slice(),
                span: Span::saturating_from_range(lexer.span()),
            };
            trace!(kind = ?lexeme.kind, span = %lexeme.span, "pattern token");
            lexemes.push(lexeme);
        }
        PatternParser {
            lexemes,
            pos: 0,
            end: Span::saturating_from_range(source.len()..source.len()),
        }
    }

    fn peek_kind(&self) -> Option<PatternToken> {
        self.lexemes.get(self.pos).map(|l| l.kind)
    }

    fn bump(&mut self) -> Option<Lexeme<'src>> {
        let lexeme = self.lexemes.get(self.pos).copied()?;
        self.pos += 1;
        Some(lexeme)
    }

    /// Consume the next token if it is `kind`.
    fn eat(&mut self, kind: PatternToken) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn pattern(&mut self) -> Result<Vec<PathSegment>, ParseError> {
        if self.lexemes.is_empty() {
            return Err(ParseError::malformed_pattern(
                Span::point(0),
                PatternFault::EmptyPattern,
            ));
        }

        let mut segments = vec![self.segment()?];
        while let Some(lexeme) = self.bump() {
            match lexeme.kind {
                PatternToken::Separator => segments.push(self.segment()?),
                // Only reachable after `text '*'`: `Text` is greedy and a
                // lone trailing `*` was already consumed by `segment`.
                PatternToken::Text | PatternToken::Wildcard => {
                    return Err(ParseError::malformed_pattern(
                        lexeme.span,
                        PatternFault::MisplacedWildcard,
                    ));
                }
            }
        }
        Ok(segments)
    }

    fn segment(&mut self) -> Result<PathSegment, ParseError> {
        let Some(lexeme) = self.bump() else {
            return Err(ParseError::malformed_pattern(
                self.end,
                PatternFault::EmptySegment,
            ));
        };

        match lexeme.kind {
            PatternToken::Text => {
                let has_wildcard = self.eat(PatternToken::Wildcard);
                trace!(text = lexeme.text, has_wildcard, "segment");
                Ok(PathSegment::new(lexeme.text, has_wildcard))
            }
            PatternToken::Separator => Err(ParseError::malformed_pattern(
                lexeme.span,
                PatternFault::EmptySegment,
            )),
            PatternToken::Wildcard => {
                let fault = if self.peek_kind() == Some(PatternToken::Text) {
                    PatternFault::MisplacedWildcard
                } else {
                    PatternFault::BareWildcard
                };
                Err(ParseError::malformed_pattern(lexeme.span, fault))
            }
        }
    }
}
