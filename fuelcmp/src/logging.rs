// src/logging.rs
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level for a given number of `-v` flags.
#[must_use]
pub const fn verbosity_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Builds the log filter from `RUST_LOG`-style directives.
///
/// The verbosity level only applies when `directives` sets no level of its
/// own, so `RUST_LOG=debug` is honoured without `-v`.
#[must_use]
pub fn env_filter(verbose: u8, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity_level(verbose).into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Installs the stderr subscriber for the process.
pub fn init(verbose: u8) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
