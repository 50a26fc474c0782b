use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GHSTATS_LOG";

/// Where log lines go for the current command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The TUI owns the terminal; anything written to it would corrupt the screen.
    Discard,
}

/// Install the subscriber. Stdout is reserved for rendered output.
pub fn init(target: LogTarget) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("ghstats=warn"));
    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .try_init();
}
