/// Structured logging via `tracing`, always on stderr so stdout stays clean.
use std::io::IsTerminal;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive (e.g. `debug`).
pub const LOG_ENV: &str = "CONDUIT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the log filter: `debug` with `--debug`, else `CONDUIT_LOG`, else `warn`.
#[must_use]
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(debug: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_debug_flag_wins() {
        assert_eq!(filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
