//! The `int` and `sum` commands.

use patok_lexer::{parse_int_with, sum_csv};
use tracing::debug;

use super::{fail, print_rendered};
use crate::options::{OutputFormat, OutputOptions};

/// Parse `input` as an integer and print it.
pub fn parse_int_command(input: &str, options: &OutputOptions) {
    let result = parse_int_with(input, |value| debug!(value, "parsed integer"));
    match result {
        Ok(value) => print_rendered(render_int(input, value, options)),
        Err(err) => fail(input, &err),
    }
}

/// Sum a comma-separated integer list and print the total.
pub fn sum_command(input: &str, options: &OutputOptions) {
    match sum_csv(input) {
        Ok(total) => print_rendered(render_sum(input, total, options)),
        Err(err) => fail(input, &err),
    }
}

pub fn render_int(
    input: &str,
    value: i32,
    options: &OutputOptions,
) -> Result<String, serde_json::Error> {
    render_value("Parsed int", input, i64::from(value), options)
}

pub fn render_sum(
    input: &str,
    total: i64,
    options: &OutputOptions,
) -> Result<String, serde_json::Error> {
    render_value("CSV number sum", input, total, options)
}

fn render_value(
    label: &str,
    input: &str,
    value: i64,
    options: &OutputOptions,
) -> Result<String, serde_json::Error> {
    match options.format() {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&serde_json::json!({ "input": input, "value": value }))
        }
        OutputFormat::Debug => Ok(format!("{value:?}")),
        OutputFormat::Text if options.verbose => Ok(format!("{label} ('{input}'): {value}")),
        OutputFormat::Text => Ok(format!("{label}: {value}")),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_text() {
        let out = render_int("-123", -123, &OutputOptions::default()).unwrap();
        assert_eq!(out, "Parsed int: -123");
    }

    #[test]
    fn sum_text_verbose() {
        let options = OutputOptions {
            format: None,
            verbose: true,
        };
        let out = render_sum("1, 2, 3", 6, &options).unwrap();
        assert_eq!(out, "CSV number sum ('1, 2, 3'): 6");
    }

    #[test]
    fn sum_json() {
        let options = OutputOptions {
            format: Some(OutputFormat::Json),
            verbose: false,
        };
        let out = render_sum("1,2", 3, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "input": "1,2", "value": 3 }));
    }

    #[test]
    fn int_debug() {
        let options = OutputOptions {
            format: Some(OutputFormat::Debug),
            verbose: false,
        };
        assert_eq!(render_int("7", 7, &options).unwrap(), "7");
    }
}
