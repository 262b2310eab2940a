//! Log subscriber setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How the process talks to the terminal while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Line-oriented output; warnings on stderr are harmless.
    Plain,
    /// Full-screen TUI; anything written to stderr lands on the alternate
    /// screen, so logging stays off unless asked for with `-v`.
    Interactive,
}

/// Level for the crate's own events given `-v` count and `-q`.
pub fn level_for(verbosity: u8, quiet: bool, mode: OutputMode) -> LevelFilter {
    match (verbosity, mode) {
        (_, OutputMode::Interactive) if quiet => LevelFilter::OFF,
        (_, OutputMode::Plain) if quiet => LevelFilter::WARN,
        (0, OutputMode::Interactive) => LevelFilter::OFF,
        (0, OutputMode::Plain) => LevelFilter::WARN,
        (1, _) => LevelFilter::INFO,
        (2, _) => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter directive scoped to this crate, e.g. `file_browser=debug`.
pub fn directive(level: LevelFilter) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Install the global subscriber. `RUST_LOG` takes precedence over flags.
pub fn init(verbosity: u8, quiet: bool, mode: OutputMode) {
    let level = level_for(verbosity, quiet, mode);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
