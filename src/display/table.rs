/// Table formatter: bordered tables on a TTY, tab-separated text when piped.
use std::io::Write;

use comfy_table::{Row, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use serde_json::Value;

use super::errors::DisplayError;

/// One data set item viewed as an ordered field→value mapping.
pub type Record = serde_json::Map<String, Value>;

/// Serialize every item into a `Record`.
///
/// # Errors
///
/// Returns `DisplayError::NotARecord` for the first item that is not a JSON object.
pub fn to_records<T: Serialize>(data: &[T]) -> Result<Vec<Record>, DisplayError> {
    data.iter()
        .enumerate()
        .map(|(index, item)| match serde_json::to_value(item)? {
            Value::Object(map) => Ok(map),
            _ => Err(DisplayError::NotARecord { index }),
        })
        .collect()
}

/// Field names of the first record, after checking every record has the same set.
///
/// # Errors
///
/// Returns `DisplayError::FieldMismatch` for the first record whose fields differ.
pub fn field_names(records: &[Record]) -> Result<Vec<String>, DisplayError> {
    let Some(first) = records.first() else {
        return Ok(Vec::new());
    };
    let expected: Vec<String> = first.keys().cloned().collect();

    for (index, record) in records.iter().enumerate().skip(1) {
        let same =
            record.len() == expected.len() && expected.iter().all(|k| record.contains_key(k));
        if !same {
            return Err(DisplayError::FieldMismatch {
                index,
                expected,
                found: record.keys().cloned().collect(),
            });
        }
    }

    Ok(expected)
}

/// Display text for a single cell.
#[must_use]
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Values of `record` in `fields` order.
fn row_cells(record: &Record, fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|f| record.get(f).map(cell_text).unwrap_or_default())
        .collect()
}

/// Build a bordered table from headers and pre-rendered rows.
#[must_use]
pub fn bordered<H, R>(headers: H, rows: R) -> Table
where
    H: Into<Row>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(headers);
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Render a data set as a table.
///
/// An empty data set logs a warning (stderr) and renders nothing.
///
/// # Errors
///
/// Returns `DisplayError` when the records are not homogeneous mappings or
/// `out` rejects the write.
pub fn write_table<T: Serialize>(
    data: &[T],
    interactive: bool,
    out: &mut dyn Write,
) -> Result<i32, DisplayError> {
    if data.is_empty() {
        tracing::warn!("No data to display");
        return Ok(0);
    }

    let records = to_records(data)?;
    let fields = field_names(&records)?;

    if interactive {
        write_interactive_table(&records, &fields, out)?;
    } else {
        write_simple_table(&records, &fields, out)?;
    }
    Ok(0)
}

fn write_interactive_table(
    records: &[Record],
    fields: &[String],
    out: &mut dyn Write,
) -> Result<(), DisplayError> {
    let table = bordered(fields, records.iter().map(|r| row_cells(r, fields)));
    writeln!(out, "{table}")?;
    Ok(())
}

fn write_simple_table(
    records: &[Record],
    fields: &[String],
    out: &mut dyn Write,
) -> Result<(), DisplayError> {
    writeln!(out, "{}", fields.join("\t"))?;
    for record in records {
        writeln!(out, "{}", row_cells(record, fields).join("\t"))?;
    }
    Ok(())
}
