//! cssdts - TypeScript declarations for CSS modules.
//!
//! Entry point: parses arguments, sets up logging and colors, runs the
//! selected mode and reports errors through miette.

use clap::Parser;
use cssdts_cli::{cli, commands, error, logger, ui};
use miette::Result;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.no_color);
    ui::init_colors(args.no_color);

    commands::execute(args)
        .await
        .map_err(error::cli_error_to_miette)
}
