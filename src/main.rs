#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! conduit — universal terminal, JSON, and table output for CLI subcommands.

mod cli;
mod commands;
mod display;
mod logging;
mod prompt;
mod types;

use std::io::Write;

use clap::Parser;

use cli::{Cli, OutputCtx, is_piped, write_error};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.debug) {
        eprintln!("Warning: {err:#}");
    }

    let ctx = OutputCtx::new(cli.format, cli.output, !is_piped(), cli.no_interaction)
        .with_debug(cli.debug);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::dispatch(&cli.command, &ctx, &mut out);
    let _ = out.flush();
    drop(out);

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            write_error(&err, ctx.format);
            std::process::exit(err.exit_code());
        }
    }
}
