/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// conduit — universal output formats for CLI subcommands.
#[derive(Debug, Parser)]
#[command(
    name = "conduit",
    about = "Terminal, JSON, and table output for every command",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. `terminal` switches to `json` when stdout is piped.
    #[arg(
        long,
        global = true,
        value_name = "FORMAT",
        default_value = "terminal",
        env = "CONDUIT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Write JSON output to this file instead of stdout.
    #[arg(long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Never show interactive menus or prompts.
    #[arg(long, global = true)]
    pub no_interaction: bool,

    /// Emit debug logs (including timing spans) to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable decorative output.
    #[default]
    Terminal,
    /// Pretty-printed JSON array of records.
    Json,
    /// Aligned table (tab-separated when piped).
    Table,
}

impl OutputFormat {
    /// Every format, in help order.
    pub const ALL: [Self; 3] = [Self::Terminal, Self::Json, Self::Table];

    /// Lowercase name as accepted by `--format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Json => "json",
            Self::Table => "table",
        }
    }

    /// One-line description shown by `conduit formats`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Terminal => "Human-readable terminal output (default)",
            Self::Json => "Machine-readable JSON format",
            Self::Table => "Tabular display format",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Example command showing universal output formats.
    #[command(name = "interfaces:example")]
    Example,
    /// Browse available interfaces interactively.
    #[command(name = "interfaces:browse")]
    Browse,
    /// List the output formats every command supports.
    Formats,
    /// Check that the interfaces component is wired up.
    Init,
}
