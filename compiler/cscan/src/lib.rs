//! `cscan` driver library.
//!
//! Reads C-like source from a file or from standard input and prints the
//! token stream produced by [`cscan_lexer`]. The binary in `main.rs` is a
//! thin wrapper over [`parse_args`], [`run_file`], and [`run_repl`].

mod args;
mod commands;
mod dump;
mod error;

pub use args::{parse_args, usage, Command};
pub use commands::{read_source, run_file, run_repl};
pub use dump::{dump_tokens, DumpStats, TokenDumper};
pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this early in `main()` to enable tracing output.
/// Controlled by `RUST_LOG` environment variable:
/// - `RUST_LOG=cscan=debug` - per-file and per-line summaries
/// - `RUST_LOG=cscan=trace` - every token as it is dumped
///
/// Output goes to stderr so it never mixes with the dump on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
