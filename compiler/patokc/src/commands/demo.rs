//! The `demo` command: run every parser over a fixed set of samples.

use std::fmt::Write as _;

use patok_lexer::{parse_int, parse_int_with, sum_csv, tokenize};

const INT_SAMPLES: [(&str, &str); 3] = [
    ("Parsed int", "123"),
    ("Parsed negative int", "-123"),
    ("Parse int failure", "abc-123"),
];

const ACTION_SAMPLE: &str = "1024";

const CSV_SAMPLE: &str = "1, 2, 3";

const PATTERN_SAMPLES: [&str; 4] = ["part*", "home", "home/povilas/prefix*", "a//b"];

/// Print the sample report.
pub fn run_demo() {
    println!("{}", demo_report());
}

/// Build the sample report. Failures are part of the report, not errors.
pub fn demo_report() -> String {
    let mut out = String::new();

    for (label, input) in INT_SAMPLES {
        match parse_int(input) {
            Ok(value) => {
                let _ = writeln!(out, "{label}: {value}");
            }
            Err(err) => {
                let _ = writeln!(out, "{label}: {err}");
            }
        }
    }

    let mut parsed = Vec::new();
    if let Err(err) = parse_int_with(ACTION_SAMPLE, |n| parsed.push(n)) {
        let _ = writeln!(out, "Int parse failed: {err}");
    }
    for n in parsed {
        let _ = writeln!(out, "Parsed: {n}");
    }

    match sum_csv(CSV_SAMPLE) {
        Ok(total) => {
            let _ = writeln!(out, "CSV number sum: {total}");
        }
        Err(err) => {
            let _ = writeln!(out, "CSV number sum: {err}");
        }
    }

    for pattern in PATTERN_SAMPLES {
        match tokenize(pattern) {
            Ok(segments) => {
                let _ = writeln!(out, "Pattern '{pattern}':");
                for segment in &segments {
                    let _ = writeln!(
                        out,
                        "  {} (wildcard: {})",
                        segment.text, segment.has_wildcard
                    );
                }
            }
            Err(err) => {
                let _ = writeln!(out, "Pattern '{pattern}': {err}");
            }
        }
    }

    // Trailing newline comes from println!
    out.pop();
    out
}
