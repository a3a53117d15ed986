//! Diagnostic tracing for the `patrol` binary.
//!
//! Output goes to stderr so stdout carries only the answer.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level comes from the `-v`
/// count: none = `warn`, one = `info`, two or more = `debug`.
///
/// ```bash
/// RUST_LOG=patrol_search=trace patrol --part2 input.txt
/// ```
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
