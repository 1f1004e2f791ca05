/// Shared serializable output types for all commands.
///
/// These are the records each command's data set is made of. They are what
/// gets written to stdout, either as JSON or rendered as a table.
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::display::DisplayError;

/// A component in the `interfaces:example` showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOutput {
    pub name: String,
    /// Lifecycle status: `active`, `launching`, or `growing`.
    pub status: String,
    pub version: String,
    pub description: String,
}

/// An interface listed by `interfaces:browse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceOutput {
    /// Type name (e.g., "DisplaysData").
    pub interface: String,
    /// Kind of item: "Trait", "Module", or "Function".
    #[serde(rename = "type")]
    pub kind: String,
    /// One-line purpose.
    pub purpose: String,
    /// Comma-separated method names.
    pub methods: String,
    /// Source file, relative to the crate root.
    pub file: String,
}

/// An entry in the format catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOutput {
    pub format: OutputFormat,
    pub description: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `DisplayError`.
    #[must_use]
    pub fn from_display_error(err: &DisplayError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_kind_serializes_as_type() {
        let item = InterfaceOutput {
            interface: "DisplaysData".to_owned(),
            kind: "Trait".to_owned(),
            purpose: "p".to_owned(),
            methods: "m".to_owned(),
            file: "src/display/contracts.rs".to_owned(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "Trait");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let err = DisplayError::NotARecord { index: 2 };
        let value = serde_json::to_value(ErrorOutput::from_display_error(&err)).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "not_a_record");
        assert_eq!(value["error"]["message"], "Record 2 is not a field/value mapping");
    }
}
