//! # Packages Module
//!
//! This module resolves which package a file belongs to by inspecting its
//! path. A package is the directory immediately following a `packages` path
//! segment, treated as the unit to which a license header policy applies.

use std::ffi::OsStr;
use std::path::{Component, Path};

/// The path segment that marks the start of the package namespace.
pub const PACKAGE_MARKER: &str = "packages";

/// Resolves the package name for a path.
///
/// Scans the path's components in order; the first component literally equal
/// to [`PACKAGE_MARKER`] that has a following component yields that following
/// component as the package name. Returns `None` when no such marker exists or
/// when the marker is the final component.
///
/// This is a pure string operation: the path is not touched on disk, and the
/// component after the marker is returned even when it is itself the file
/// name (such a "package" simply has no header configured).
pub fn resolve_package_name(path: &Path) -> Option<String> {
  let mut components = path.components().peekable();

  while let Some(component) = components.next() {
    if let Component::Normal(name) = component
      && name == OsStr::new(PACKAGE_MARKER)
      && let Some(Component::Normal(next)) = components.peek()
    {
      return Some(next.to_string_lossy().into_owned());
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_resolve_simple() {
    let package = resolve_package_name(Path::new("/repo/packages/client-ts/src/index.ts"));
    assert_eq!(package.as_deref(), Some("client-ts"));
  }

  #[test]
  fn test_resolve_relative_path() {
    let package = resolve_package_name(Path::new("packages/react/App.tsx"));
    assert_eq!(package.as_deref(), Some("react"));
  }

  #[test]
  fn test_resolve_no_marker() {
    assert!(resolve_package_name(Path::new("/repo/src/index.ts")).is_none());
  }

  #[test]
  fn test_resolve_marker_is_last_segment() {
    assert!(resolve_package_name(Path::new("/repo/packages")).is_none());
  }

  #[test]
  fn test_resolve_first_marker_wins() {
    let package = resolve_package_name(Path::new("/repo/packages/outer/packages/inner/file.ts"));
    assert_eq!(package.as_deref(), Some("outer"));
  }

  #[test]
  fn test_resolve_marker_must_match_exactly() {
    assert!(resolve_package_name(Path::new("/repo/my-packages/client-ts/index.ts")).is_none());
    assert!(resolve_package_name(Path::new("/repo/Packages/client-ts/index.ts")).is_none());
  }

  #[test]
  fn test_resolve_file_directly_under_marker() {
    // The component after the marker is returned even when it is the file
    // itself; such a name simply finds no header in the table.
    let package = resolve_package_name(Path::new("/repo/packages/stray.ts"));
    assert_eq!(package.as_deref(), Some("stray.ts"));
  }
}
