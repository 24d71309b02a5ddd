//! stderr log output for the `booking` binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log level for a number of `-v` flags; warnings only by default.
fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter directives scoping `level` to this binary and the engine, so
/// dependencies stay quiet.
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    format!("booking={level},booking_engine={level}")
}

/// Install the subscriber. A set `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
