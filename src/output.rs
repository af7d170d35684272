//! # Output Module
//!
//! This module centralizes the user-facing stdout output of the tool.
//!
//! The contract is deliberately small and script-friendly: one summary line
//! `Headers applied to N files`, followed by the N modified paths in
//! traversal order. Color is applied only when stdout is a terminal, so the
//! piped output is byte-exact.

use owo_colors::{OwoColorize, Stream};

use crate::report::RunSummary;

/// Prints the run summary: the count line, then one line per modified path.
pub fn print_run_summary(summary: &RunSummary) {
  let count = summary.modified_count();
  println!(
    "Headers applied to {} files",
    count.if_supports_color(Stream::Stdout, |n| n.cyan())
  );

  for path in summary.modified() {
    println!("{}", path.display());
  }
}
