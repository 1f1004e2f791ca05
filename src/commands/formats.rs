/// `formats` command: list the output formats every command supports.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::display::{DisplayError, DisplaysData, FormatsAsJson, handle};
use crate::types::FormatOutput;

#[derive(Debug, Default)]
pub struct FormatsCommand;

impl FormatsAsJson for FormatsCommand {
    type Item = FormatOutput;
}

impl DisplaysData for FormatsCommand {
    fn get_data(&self) -> Result<Vec<FormatOutput>, DisplayError> {
        Ok(Self::available_formats()
            .into_iter()
            .map(|(format, description)| FormatOutput {
                format,
                description: description.to_owned(),
            })
            .collect())
    }

    fn output_terminal(
        &mut self,
        data: &[FormatOutput],
        _ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError> {
        writeln!(out, "Available output formats:")?;
        writeln!(out)?;
        for f in data {
            writeln!(out, "  {:<10}{}", f.format.as_str(), f.description)?;
        }
        Ok(0)
    }
}

/// Run `conduit formats`.
///
/// # Errors
///
/// Returns `DisplayError` if rendering or writing `--output` fails.
pub fn run(ctx: &OutputCtx, out: &mut dyn Write) -> Result<i32, DisplayError> {
    handle(&mut FormatsCommand, ctx, out)
}
