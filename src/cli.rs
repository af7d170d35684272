//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.
//!
//! The tool takes no positional arguments: the working directory at invocation
//! time is the traversal root. The flags here only control stderr diagnostics
//! and color escapes; the stdout contract (summary line plus modified paths)
//! and the exit code are unaffected by them.

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::print_run_summary;
use crate::processor::HeaderApplier;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Stamp headers across the monorepo rooted at the current directory
  pkglicense

  # Same, with per-file diagnostics on stderr
  pkglicense -v

  # Suppress stderr diagnostics entirely
  pkglicense -q
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress stderr diagnostics
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Run a full stamping pass rooted at the working directory.
pub fn run(cli: Cli) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(cli.quiet, cli.verbose);

  // Set verbose mode for the verbose_log! macro and stderr formatting
  if cli.verbose > 0 {
    set_verbose();
  } else if cli.quiet {
    set_quiet();
  }
  cli.colors.apply();

  let root = std::env::current_dir().with_context(|| "Failed to get current directory")?;
  debug!("Traversal root: {}", root.display());

  let applier = HeaderApplier::new(root);
  let summary = applier.run()?;

  print_run_summary(&summary);

  Ok(())
}
