//! patok CLI
//!
//! Path-pattern tokenizer and integer parsing front end.

use patokc::commands::{parse_int_command, run_demo, sum_command, tokenize_command};
use patokc::options::{
    ignored_options_warning, parse_output_options, split_leading_options, OutputOptions,
};

fn main() {
    patokc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // Leading output flags apply to every command.
    let (leading, command_args) = split_leading_options(&args);
    let (global, warnings) = parse_output_options(leading);
    report_warnings(&warnings);

    let Some((command, rest)) = command_args.split_first() else {
        print_usage();
        return;
    };

    match command.as_str() {
        "tokenize" | "tok" => {
            let Some(pattern) = rest.first() else {
                eprintln!("Usage: patok tokenize <pattern> [--format=text|debug|json] [-v]");
                std::process::exit(1);
            };
            let options = command_options(&global, &rest[1..]);
            tokenize_command(pattern, &options);
        }
        "int" => {
            let Some(input) = rest.first() else {
                eprintln!("Usage: patok int <integer> [--format=text|debug|json] [-v]");
                std::process::exit(1);
            };
            let options = command_options(&global, &rest[1..]);
            parse_int_command(input, &options);
        }
        "sum" => {
            let Some(input) = rest.first() else {
                eprintln!("Usage: patok sum <list> [--format=text|debug|json] [-v]");
                eprintln!("Example: patok sum \"1, 2, 3\"");
                std::process::exit(1);
            };
            let options = command_options(&global, &rest[1..]);
            sum_command(input, &options);
        }
        "demo" => {
            let options = command_options(&global, rest);
            if let Some(warning) = ignored_options_warning(command, &options) {
                report_warnings(&[warning]);
            }
            run_demo();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("patok {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Global options overlaid with the command's trailing flags.
fn command_options(global: &OutputOptions, args: &[String]) -> OutputOptions {
    let (local, warnings) = parse_output_options(args);
    report_warnings(&warnings);
    let mut options = global.clone();
    options.merge(&local);
    options
}

fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn print_usage() {
    println!("patok - path-pattern tokenizer");
    println!();
    println!("Usage: patok [output options] <command> [args] [output options]");
    println!();
    println!("Commands:");
    println!("  tokenize <pattern>   Split a path pattern into segments");
    println!("  int <integer>        Parse a signed 32-bit integer");
    println!("  sum <list>           Sum a comma-separated integer list");
    println!("  demo                 Run all parsers over built-in samples");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Output options:");
    println!("  --format=<fmt>       Output format: text (default), debug, json");
    println!("  --json               Same as --format=json");
    println!("  --verbose, -v        Show extra detail");
    println!();
    println!("Patterns:");
    println!("  Segments are separated by '/'. A segment ending in '*' is a wildcard.");
    println!("  Empty segments and '*' anywhere else are rejected.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Tracing filter, e.g. RUST_LOG=patok_lexer=trace");
    println!();
    println!("Examples:");
    println!("  patok tokenize 'home/povilas/prefix*'");
    println!("  patok tokenize 'src*/lib' --json");
    println!("  patok int -123");
    println!("  patok sum '1, 2, 3'");
    println!("  patok demo");
}
