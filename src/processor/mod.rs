//! # Processor Module
//!
//! This module contains the core functionality for walking a source tree and
//! stamping package license headers onto files that are missing them.
//!
//! The module is organized into two submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal
//!
//! The [`HeaderApplier`] struct is the main entry point, orchestrating the
//! submodules to provide a cohesive API.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::header_detection::{HeaderDetector, LeadingLinesDetector};
use crate::headers::{self, HeaderTable};
use crate::packages::resolve_package_name;
use crate::report::{FileAction, RunSummary};
use crate::verbose_log;

/// Processor that applies package license headers across a source tree.
///
/// The `HeaderApplier` is responsible for:
/// - Scanning the tree under the traversal root
/// - Filtering files by extension and resolvable package
/// - Looking up each package's header in the fixed table
/// - Prepending the header when it is not already present
/// - Collecting the list of modified files for the run summary
///
/// Processing is a single synchronous pass; per-file read failures are
/// swallowed (the file is treated as unmodified) while write failures
/// propagate and abort the run.
pub struct HeaderApplier {
  /// Root of the traversal, normally the invocation's working directory
  root: PathBuf,

  /// Fixed mapping from package name to header text
  table: HeaderTable,

  /// Detector deciding whether a file already carries its header
  detector: Box<dyn HeaderDetector>,

  /// Collector for directory traversal
  file_collector: FileCollector,
}

impl HeaderApplier {
  /// Creates an applier over the built-in header table.
  ///
  /// # Parameters
  ///
  /// * `root` - The directory the recursive scan starts from
  pub fn new(root: PathBuf) -> Self {
    Self::with_detector(root, Box::new(LeadingLinesDetector::new()))
  }

  /// Creates an applier with a custom header detector.
  pub fn with_detector(root: PathBuf, detector: Box<dyn HeaderDetector>) -> Self {
    Self {
      root,
      table: HeaderTable::builtin(),
      detector,
      file_collector: FileCollector::new(),
    }
  }

  /// Runs one full pass over the tree.
  ///
  /// Every regular file reachable from the root is considered. A file is
  /// stamped when all of the following hold: its extension is in the target
  /// set, its path resolves to a package name, and that package has a header
  /// configured. Everything else is left untouched.
  ///
  /// # Returns
  ///
  /// The [`RunSummary`] with per-file outcomes in traversal order.
  ///
  /// # Errors
  ///
  /// Returns an error only when writing a stamped file fails; read failures
  /// are swallowed per the skip-and-continue policy.
  pub fn run(&self) -> Result<RunSummary> {
    let files = self.file_collector.traverse_directory(&self.root)?;
    debug!("Considering {} files under {}", files.len(), self.root.display());

    let mut summary = RunSummary::default();

    for path in files {
      if !headers::is_target_extension(&path) {
        trace!("Skipping: {} (extension not targeted)", path.display());
        continue;
      }

      let Some(package) = resolve_package_name(&path) else {
        trace!("Skipping: {} (no package marker in path)", path.display());
        continue;
      };

      let Some(header) = self.table.header_for(&package) else {
        trace!("Skipping: {} (no header configured for '{}')", path.display(), package);
        continue;
      };

      let action = self.apply_header_if_needed(&path, header)?;
      if action == FileAction::Stamped {
        verbose_log!("Stamped header onto: {}", path.display());
      }
      summary.record(path, action);
    }

    Ok(summary)
  }

  /// Prepends the header to a file unless it is already present.
  ///
  /// The file is read as UTF-8 text; any read failure (missing file,
  /// permission error, undecodable content) yields
  /// [`FileAction::SkippedUnreadable`] with a warning on stderr, never an
  /// error. When the header is needed, the new content is the header
  /// concatenated directly before the original content and the file is
  /// rewritten in place.
  ///
  /// # Errors
  ///
  /// Returns an error if the rewrite itself fails.
  pub fn apply_header_if_needed(&self, path: &Path, header: &str) -> Result<FileAction> {
    let content = match FileIO::read_text(path) {
      Ok(content) => content,
      Err(e) => {
        warn!("Skipping unreadable file {}: {:#}", path.display(), e);
        return Ok(FileAction::SkippedUnreadable);
      }
    };

    if !self.detector.needs_header(&content, header) {
      trace!("Header already present: {}", path.display());
      return Ok(FileAction::AlreadyStamped);
    }

    let new_content = format!("{}{}", header, content);
    FileIO::write_text(path, &new_content)?;

    Ok(FileAction::Stamped)
  }
}
