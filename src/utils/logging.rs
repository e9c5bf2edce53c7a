//! Logging initialization for the command-line binary
//!
//! Log records go to stderr so that stdout only carries reports.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show debug and higher level logs
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//!
//! `--verbose` and `--quiet` override `RUST_LOG`.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `level` overrides `RUST_LOG` when given.
pub fn init_logging(level: Option<LevelFilter>) {
    let env_filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_level(true);

    // A second initialization (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(env_filter).with(stderr_layer).try_init();
}
