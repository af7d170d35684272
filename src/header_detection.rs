//! # Header Detection Module
//!
//! This module contains the interfaces and implementations for deciding whether
//! a file already carries its license header. It allows for easily replacing
//! the detection algorithm without modifying the processor.

/// Trait for header detectors.
///
/// Implementations of this trait are responsible for determining whether file
/// content needs a given header prepended.
pub trait HeaderDetector: Send + Sync {
  /// Checks whether the content still needs the header.
  ///
  /// # Parameters
  ///
  /// * `content` - The file content to check
  /// * `header` - The candidate header text
  ///
  /// # Returns
  ///
  /// `true` if the header should be prepended, `false` if it is already present.
  fn needs_header(&self, content: &str, header: &str) -> bool;
}

/// Default implementation of header detection.
///
/// Splits the content on `'\n'` into at most six parts (the first five lines
/// plus the remainder) and checks whether the header, trimmed of surrounding
/// whitespace, is literally equal to one of those parts.
pub struct LeadingLinesDetector;

/// Number of parts the content is split into: five leading lines and the
/// remainder of the file.
const LEADING_SPLIT_PARTS: usize = 6;

impl LeadingLinesDetector {
  pub const fn new() -> Self {
    LeadingLinesDetector
  }
}

impl Default for LeadingLinesDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl HeaderDetector for LeadingLinesDetector {
  /// Checks whether the content still needs the header.
  ///
  /// Only the leading lines are examined: this avoids accidental false
  /// positives from header-like text deep inside a file while keeping the
  /// check cheap on large files. A line that coincidentally equals the
  /// trimmed header text still counts as "already present" — idempotence is
  /// preferred over strict correctness here.
  fn needs_header(&self, content: &str, header: &str) -> bool {
    let wanted = header.trim();
    !content.splitn(LEADING_SPLIT_PARTS, '\n').any(|part| part == wanted)
  }
}
