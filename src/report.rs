//! # Report Module
//!
//! This module captures what happened to each candidate file during a run.
//! The summary owns the ordered list of modified paths that is printed at the
//! end; everything is discarded when the run finishes, nothing is persisted.

use std::path::{Path, PathBuf};

/// Action taken on a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// The header was prepended and the file rewritten
  Stamped,
  /// The file already carried its header and was left untouched
  AlreadyStamped,
  /// The file could not be read (I/O error or undecodable content) and was
  /// skipped without being counted as modified
  SkippedUnreadable,
}

/// Outcome recorded for one candidate file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
  /// Path to the file, as encountered during traversal
  pub path: PathBuf,
  /// What happened to it
  pub action: FileAction,
}

/// Accumulated outcomes for one run, in traversal order.
#[derive(Debug, Default)]
pub struct RunSummary {
  outcomes: Vec<FileOutcome>,
}

impl RunSummary {
  pub fn record(&mut self, path: PathBuf, action: FileAction) {
    self.outcomes.push(FileOutcome { path, action });
  }

  /// Paths of files actually rewritten, in traversal order.
  pub fn modified(&self) -> impl Iterator<Item = &Path> {
    self
      .outcomes
      .iter()
      .filter(|outcome| outcome.action == FileAction::Stamped)
      .map(|outcome| outcome.path.as_path())
  }

  /// Number of files rewritten during the run.
  pub fn modified_count(&self) -> usize {
    self.modified().count()
  }

  /// Number of files skipped because they could not be read.
  pub fn skipped_unreadable_count(&self) -> usize {
    self
      .outcomes
      .iter()
      .filter(|outcome| outcome.action == FileAction::SkippedUnreadable)
      .count()
  }

  /// All recorded outcomes, in traversal order.
  pub fn outcomes(&self) -> &[FileOutcome] {
    &self.outcomes
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_modified_preserves_traversal_order() {
    let mut summary = RunSummary::default();
    summary.record(PathBuf::from("b.ts"), FileAction::Stamped);
    summary.record(PathBuf::from("c.ts"), FileAction::AlreadyStamped);
    summary.record(PathBuf::from("a.ts"), FileAction::Stamped);

    let modified: Vec<_> = summary.modified().collect();
    assert_eq!(modified, vec![Path::new("b.ts"), Path::new("a.ts")]);
    assert_eq!(summary.modified_count(), 2);
  }

  #[test]
  fn test_skipped_unreadable_not_counted_as_modified() {
    let mut summary = RunSummary::default();
    summary.record(PathBuf::from("bad.ts"), FileAction::SkippedUnreadable);

    assert_eq!(summary.modified_count(), 0);
    assert_eq!(summary.skipped_unreadable_count(), 1);
  }

  #[test]
  fn test_empty_summary() {
    let summary = RunSummary::default();
    assert_eq!(summary.modified_count(), 0);
    assert!(summary.outcomes().is_empty());
  }
}
