//! Command handlers for the `patok` CLI.
//!
//! Each submodule implements one command. Handlers print to stdout and exit
//! with status 1 on failure; the `render_*` functions they call are pure so
//! the output format can be tested directly.

use patok_lexer::ParseError;

mod demo;
mod number;
mod tokenize;

pub use demo::{demo_report, run_demo};
pub use number::{parse_int_command, render_int, render_sum, sum_command};
pub use tokenize::{render_segments, tokenize_command};

/// Render a parse error with the input and a caret under the failing byte.
///
/// ```text
/// error: malformed pattern: empty path segment at 2..3
///   a//b
///     ^
/// ```
pub fn render_error(input: &str, err: &ParseError) -> String {
    let start = (err.span.start as usize).min(input.len());
    // Column in characters; the span is in bytes.
    let column = input
        .char_indices()
        .take_while(|(i, _)| *i < start)
        .count();
    let width = input
        .get(start..(err.span.end as usize).min(input.len()))
        .map_or(0, |s| s.chars().count())
        .max(1);

    format!(
        "error: {err}\n  {input}\n  {}{}",
        " ".repeat(column),
        "^".repeat(width)
    )
}

/// Print a parse error to stderr and exit with status 1.
pub(crate) fn fail(input: &str, err: &ParseError) -> ! {
    eprintln!("{}", render_error(input, err));
    std::process::exit(1);
}

/// Print rendered output, or report a serialization failure and exit.
pub(crate) fn print_rendered(rendered: Result<String, serde_json::Error>) {
    match rendered {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
