/// Format dispatch: route a command's data set to the resolved formatter.
use std::io::Write;

use super::contracts::DisplaysData;
use super::errors::DisplayError;
use crate::cli::{OutputCtx, OutputFormat};

/// Fetch `command`'s data set and render it in `ctx.format`.
///
/// The format is resolved when `ctx` is built, before any data is fetched.
///
/// # Errors
///
/// Returns whatever `DisplayError` the data source or formatter reports.
pub fn handle<C: DisplaysData>(
    command: &mut C,
    ctx: &OutputCtx,
    out: &mut dyn Write,
) -> Result<i32, DisplayError> {
    let data = {
        let _t = ctx.timer("get_data");
        command.get_data()?
    };
    tracing::debug!(format = %ctx.format, records = data.len(), "dispatching");

    let _t = ctx.timer("render");
    match ctx.format {
        OutputFormat::Json => command.output_json(&data, ctx, out),
        OutputFormat::Table => command.output_table(&data, ctx, out),
        OutputFormat::Terminal => command.output_terminal(&data, ctx, out),
    }
}
