//! Log output for both binaries.
//!
//! The subscriber is built here and installed by the caller for the duration
//! of a run with [`tracing::subscriber::with_default`].

use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `fmt` layer on stderr, filtered by `RUST_LOG` (default `info`).
pub fn subscriber() -> impl Subscriber + Send + Sync {
    let filter = if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .with(filter)
}
