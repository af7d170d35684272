//! # pkglicense
//!
//! A tool that stamps package-scoped license headers onto source files.

mod cli;
mod header_detection;
mod headers;
mod logging;
mod output;
mod packages;
mod processor;
mod report;

use anyhow::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  cli::run(cli)
}
