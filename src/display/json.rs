/// JSON formatter: pretty-printed data sets to stdout or a file.
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::errors::DisplayError;

const INDENT: &[u8] = b"    ";

/// Serialize `value` as 4-space indented JSON.
///
/// Forward slashes are never escaped by `serde_json`.
///
/// # Errors
///
/// Returns `DisplayError::Serialize` if `value` cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, DisplayError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write a data set as JSON.
///
/// With `path`, the file is overwritten and a confirmation line goes to `out`;
/// otherwise the JSON itself goes to `out`.
///
/// # Errors
///
/// Returns `DisplayError::OutputWrite` if the file cannot be written, or
/// `DisplayError::Io` if `out` rejects the write.
pub fn write_json<T: Serialize>(
    data: &[T],
    path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<i32, DisplayError> {
    let mut json = to_pretty_json(data)?;
    json.push(b'\n');

    match path {
        Some(path) => {
            std::fs::write(path, &json).map_err(|source| DisplayError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), records = data.len(), "wrote JSON output");
            writeln!(out, "JSON output written to: {}", path.display())?;
        }
        None => out.write_all(&json)?,
    }

    Ok(0)
}
