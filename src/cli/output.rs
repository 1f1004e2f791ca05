/// Output context: format resolution, TTY detection, error reporting.
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use super::args::OutputFormat;
use crate::display::DisplayError;
use crate::types::ErrorOutput;

/// Whether stdout is redirected to a file, pipe, or another process.
#[must_use]
pub fn is_piped() -> bool {
    !std::io::stdout().is_terminal()
}

/// Resolve the effective output format.
///
/// `terminal` is upgraded to `json` when stdout is not interactive; explicit
/// `json` and `table` are kept as requested.
#[must_use]
pub fn resolve_format(requested: OutputFormat, interactive: bool) -> OutputFormat {
    if requested == OutputFormat::Terminal && !interactive {
        OutputFormat::Json
    } else {
        requested
    }
}

/// Output context passed to every command and formatter.
#[derive(Debug, Clone)]
pub struct OutputCtx {
    /// Resolved format. Fixed for the whole invocation.
    pub format: OutputFormat,
    /// `--output` destination for JSON.
    pub output: Option<PathBuf>,
    /// Whether stdout is attached to a terminal.
    pub interactive: bool,
    /// `--no-interaction` was passed.
    pub no_interaction: bool,
    /// When true, timers emit elapsed-time debug events.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args and the detected terminal state.
    #[must_use]
    pub fn new(
        requested: OutputFormat,
        output: Option<PathBuf>,
        interactive: bool,
        no_interaction: bool,
    ) -> Self {
        let format = resolve_format(requested, interactive);
        if format != requested {
            tracing::debug!(%requested, %format, "stdout is piped, switching format");
        }
        Self {
            format,
            output,
            interactive,
            no_interaction,
            debug: false,
        }
    }

    /// Enable timing events for `--debug`.
    #[must_use]
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// A copy of this context rendering `format` to stdout.
    ///
    /// Used when one command runs another with an explicit format.
    #[must_use]
    pub fn with_format(&self, format: OutputFormat) -> Self {
        Self {
            format,
            output: None,
            ..self.clone()
        }
    }

    /// The `--output` path, if one was given.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Whether menus and confirmations may be shown.
    #[must_use]
    pub fn allows_prompts(&self) -> bool {
        self.interactive && !self.no_interaction
    }

    /// Start a named debug timer. Emits elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &DisplayError, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(&ErrorOutput::from_display_error(err))
                .unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Terminal | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {err}");
        }
    }
}

// --- Debug timer ---

/// A RAII timer that emits elapsed milliseconds as a debug event on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }

    /// Whether this timer will emit on drop.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(label = self.label, elapsed_ms = ms, "timing");
        }
    }
}
