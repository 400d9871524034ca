//! Output options shared by every command.
//!
//! Parsed from trailing `--flag` arguments. Unknown values fall back to the
//! default with a warning, the way build flags do.

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Rust `Debug` rendering of the parsed value.
    Debug,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(OutputFormat::Text),
            "debug" => Some(OutputFormat::Debug),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Output format (--format=<text|debug|json>)
    pub format: Option<OutputFormat>,
    /// Verbose output (-v, --verbose)
    pub verbose: bool,
}

impl OutputOptions {
    /// Effective format (`text` unless overridden).
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Overlay options parsed from later arguments onto `self`.
    pub fn merge(&mut self, other: &Self) {
        if other.format.is_some() {
            self.format = other.format;
        }
        self.verbose |= other.verbose;
    }
}

/// Parse output options from command line arguments.
///
/// Returns the options plus any warnings for unrecognized values; positional
/// arguments are ignored.
pub fn parse_output_options(args: &[String]) -> (OutputOptions, Vec<String>) {
    let mut options = OutputOptions::default();
    let mut warnings = Vec::new();

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            if let Some(f) = OutputFormat::parse(format) {
                options.format = Some(f);
            } else {
                warnings.push(format!(
                    "unknown output format '{format}', options: text, debug, json"
                ));
            }
        } else if arg == "--json" {
            options.format = Some(OutputFormat::Json);
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else if arg.starts_with('-') {
            warnings.push(format!("unknown option '{arg}'"));
        }
    }

    (options, warnings)
}

/// Whether `arg` is an output flag accepted before the command name.
pub fn is_output_flag(arg: &str) -> bool {
    arg.starts_with("--format=") || arg == "--json" || arg == "--verbose" || arg == "-v"
}

/// Split arguments (program name excluded) into the leading output flags and
/// the command with its own arguments.
pub fn split_leading_options(args: &[String]) -> (&[String], &[String]) {
    let flags = args.iter().take_while(|arg| is_output_flag(arg)).count();
    args.split_at(flags)
}

/// Warning for a command that prints fixed output but was given options.
pub fn ignored_options_warning(command: &str, options: &OutputOptions) -> Option<String> {
    (*options != OutputOptions::default())
        .then(|| format!("'{command}' takes no output options; ignoring them"))
}
