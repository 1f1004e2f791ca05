/// Errors from the output formatting layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching or rendering a data set.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Writing `--output` to disk failed.
    #[error("Failed to write output to '{}': {source}", path.display())]
    OutputWrite {
        /// Destination file requested via `--output`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data set item did not serialize to a field→value mapping.
    #[error("Record {index} is not a field/value mapping")]
    NotARecord {
        /// Zero-based position of the offending record.
        index: usize,
    },

    /// A record's field set differs from the first record's.
    #[error("Record {index} has fields [{}], expected [{}]", found.join(", "), expected.join(", "))]
    FieldMismatch {
        /// Zero-based position of the offending record.
        index: usize,
        /// Field names of the first record, in order.
        expected: Vec<String>,
        /// Field names of the offending record, in order.
        found: Vec<String>,
    },

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An interactive prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code mapping for `DisplayError` variants.
impl DisplayError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            // EX_IOERR from sysexits.h
            Self::OutputWrite { .. } | Self::Io(_) => 74,
            Self::NotARecord { .. }
            | Self::FieldMismatch { .. }
            | Self::Serialize(_)
            | Self::Prompt(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutputWrite { .. } => "output_write_failed",
            Self::NotARecord { .. } => "not_a_record",
            Self::FieldMismatch { .. } => "field_mismatch",
            Self::Serialize(_) => "serialize_failed",
            Self::Prompt(_) => "prompt_failed",
            Self::Io(_) => "io_error",
        }
    }
}
