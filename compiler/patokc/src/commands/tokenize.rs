//! The `tokenize` command: split a path pattern and list its segments.

use std::fmt::Write as _;

use patok_lexer::{join_text, tokenize, PathSegment};
use tracing::debug;

use super::{fail, print_rendered};
use crate::options::{OutputFormat, OutputOptions};

/// Tokenize `pattern` and print its segments.
pub fn tokenize_command(pattern: &str, options: &OutputOptions) {
    debug!(pattern, format = ?options.format(), "tokenize command");
    match tokenize(pattern) {
        Ok(segments) => print_rendered(render_segments(pattern, &segments, options)),
        Err(err) => fail(pattern, &err),
    }
}

/// Format tokenized segments for display.
pub fn render_segments(
    pattern: &str,
    segments: &[PathSegment],
    options: &OutputOptions,
) -> Result<String, serde_json::Error> {
    match options.format() {
        OutputFormat::Json => serde_json::to_string_pretty(segments),
        OutputFormat::Debug => Ok(format!("{segments:#?}")),
        OutputFormat::Text => {
            let mut out = String::new();
            let noun = if segments.len() == 1 {
                "segment"
            } else {
                "segments"
            };
            let _ = write!(
                out,
                "Segments for '{pattern}' ({} {noun}):",
                segments.len()
            );
            for segment in segments {
                let _ = write!(
                    out,
                    "\n  {} (wildcard: {})",
                    segment.text, segment.has_wildcard
                );
            }
            if options.verbose {
                let _ = write!(out, "\n\nText without markers: {}", join_text(segments));
            }
            Ok(out)
        }
    }
}
