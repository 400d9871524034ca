//! Command-line front end for `patok_lexer`.
//!
//! The `patok` binary (`src/main.rs`) only dispatches arguments; command
//! handlers and their output formatting live here so they can be tested.
//!
//! # Tracing
//!
//! Set `RUST_LOG` to enable hierarchical tracing output on stderr:
//! - `RUST_LOG=patok_lexer=debug` - one line per tokenized pattern
//! - `RUST_LOG=patok_lexer=trace` - every raw token and segment

pub mod commands;
pub mod options;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
