/// Capability traits every data-displaying command implements.
use std::io::Write;

use serde::Serialize;

use super::errors::DisplayError;
use super::{json, table};
use crate::cli::{OutputCtx, OutputFormat};

/// A command that can emit its data set as JSON.
pub trait FormatsAsJson {
    /// One record of the command's data set.
    type Item: Serialize;

    /// Write `data` as pretty JSON to `out`, or to `--output` when set.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError` on serialization or write failure.
    fn output_json(
        &self,
        data: &[Self::Item],
        ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError> {
        json::write_json(data, ctx.output_path(), out)
    }
}

/// A command that displays a data set as terminal text, JSON, or a table.
///
/// Implementors supply the data and the terminal rendering; JSON and table
/// output come from the default methods.
pub trait DisplaysData: FormatsAsJson {
    /// Produce the data set for this invocation.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError` if the data cannot be gathered.
    fn get_data(&self) -> Result<Vec<Self::Item>, DisplayError>;

    /// Render `data` for a human at a terminal. Returns the exit code.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError` on write or prompt failure.
    fn output_terminal(
        &mut self,
        data: &[Self::Item],
        ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError>;

    /// Render `data` as a table.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError` when records are not homogeneous or the write fails.
    fn output_table(
        &self,
        data: &[Self::Item],
        ctx: &OutputCtx,
        out: &mut dyn Write,
    ) -> Result<i32, DisplayError> {
        table::write_table(data, ctx.interactive, out)
    }

    /// Formats this command supports, with descriptions.
    fn available_formats() -> Vec<(OutputFormat, &'static str)>
    where
        Self: Sized,
    {
        OutputFormat::ALL
            .iter()
            .map(|f| (*f, f.description()))
            .collect()
    }
}
