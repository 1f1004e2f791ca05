/// CLI layer: argument parsing, output context, TTY detection.
pub mod args;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use output::{OutputCtx, is_piped, write_error};
