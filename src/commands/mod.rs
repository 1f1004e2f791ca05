/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod browse;
pub mod example;
pub mod formats;
pub mod init;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::display::DisplayError;
use crate::prompt::TermPrompter;

/// Dispatch a parsed `Command` to its handler. Returns the exit code.
///
/// # Errors
///
/// Returns `DisplayError` on any command failure.
pub fn dispatch(
    command: &Command,
    ctx: &OutputCtx,
    out: &mut dyn Write,
) -> Result<i32, DisplayError> {
    match command {
        Command::Example => example::run(ctx, out),
        Command::Browse => browse::run(TermPrompter, ctx, out),
        Command::Formats => formats::run(ctx, out),
        Command::Init => init::run(out),
    }
}
