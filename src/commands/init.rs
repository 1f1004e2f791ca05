/// `init` command: confirm the component is registered and reachable.
use std::io::Write;

use crate::display::DisplayError;

/// Run `conduit init`.
///
/// # Errors
///
/// Returns `DisplayError::Io` if stdout is closed.
pub fn run(out: &mut dyn Write) -> Result<i32, DisplayError> {
    writeln!(out, "🚀 interfaces component is working!")?;
    writeln!(
        out,
        "Every command accepts --format=terminal|json|table and --output=<path>."
    )?;
    Ok(0)
}
