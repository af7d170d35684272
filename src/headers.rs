//! # Headers Module
//!
//! This module holds the compiled-in configuration surface of the tool: the
//! mapping from package name to license header text, and the set of file
//! extensions eligible for stamping. Both are fixed at build time with no
//! external override mechanism.

use std::path::Path;

/// File extensions eligible for header stamping, compared case-insensitively
/// against a file's extension (without the leading dot).
pub const TARGET_EXTENSIONS: [&str; 3] = ["ts", "tsx", "py"];

/// The built-in package-to-header entries.
///
/// Invariant: every header ends with exactly one newline and contains no
/// embedded blank-line padding, so stamping yields `header + content` with the
/// original first line pushed down by exactly one line.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
  (
    "client-ts",
    "// License: MIT. See .github/LICENSES/LICENSE_SDK.md\n",
  ),
  (
    "react",
    "// License: MIT. See .github/LICENSES/LICENSE_SDK.md\n",
  ),
  (
    "trustmath",
    "// License: BSL 1.1. Commercial use prohibited. See .github/LICENSES/LICENSE_CORE.md\n",
  ),
  (
    "next-auth",
    "// License: BSL 1.1. Commercial use prohibited. See .github/LICENSES/LICENSE_CORE.md\n",
  ),
  (
    "ai-verification",
    "// License: PolyForm Shield. AI Training Prohibited. See .github/LICENSES/LICENSE_DATA.md\n",
  ),
];

/// Immutable mapping from package name to license header text.
///
/// The table is a flat slice lookup rather than a hash map: five entries make
/// a linear scan cheaper than hashing, and a `const` constructor keeps the
/// table free of startup cost.
pub struct HeaderTable {
  entries: &'static [(&'static str, &'static str)],
}

impl HeaderTable {
  /// Returns the built-in table with the five reference packages.
  pub const fn builtin() -> Self {
    Self {
      entries: BUILTIN_ENTRIES,
    }
  }

  /// Looks up the header text configured for a package, if any.
  pub fn header_for(&self, package: &str) -> Option<&'static str> {
    self
      .entries
      .iter()
      .find(|(name, _)| *name == package)
      .map(|(_, header)| *header)
  }

  /// Number of configured packages.
  pub const fn len(&self) -> usize {
    self.entries.len()
  }

  pub const fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for HeaderTable {
  fn default() -> Self {
    Self::builtin()
  }
}

/// Checks whether a path's extension is in [`TARGET_EXTENSIONS`].
///
/// The comparison is case-insensitive, so `index.TS` qualifies the same way
/// `index.ts` does. Files without an extension never qualify.
pub fn is_target_extension(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| {
      let lowered = ext.to_ascii_lowercase();
      TARGET_EXTENSIONS.contains(&lowered.as_str())
    })
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_builtin_table_has_five_entries() {
    let table = HeaderTable::builtin();
    assert_eq!(table.len(), 5);
    assert!(!table.is_empty());
  }

  #[test]
  fn test_headers_end_with_single_newline() {
    for (name, header) in BUILTIN_ENTRIES {
      assert!(header.ends_with('\n'), "header for {} must end with newline", name);
      assert!(
        !header.ends_with("\n\n"),
        "header for {} must not carry blank-line padding",
        name
      );
      assert!(
        !header.trim_end().contains('\n'),
        "header for {} must be a single line",
        name
      );
    }
  }

  #[test]
  fn test_header_lookup_known_package() {
    let table = HeaderTable::builtin();
    let header = table.header_for("client-ts").expect("client-ts is configured");
    assert!(header.starts_with("// License: MIT."));
  }

  #[test]
  fn test_header_lookup_unknown_package() {
    let table = HeaderTable::builtin();
    assert!(table.header_for("unknownpkg").is_none());
  }

  #[test]
  fn test_sdk_packages_share_header() {
    let table = HeaderTable::builtin();
    assert_eq!(table.header_for("client-ts"), table.header_for("react"));
  }

  #[test]
  fn test_target_extensions() {
    assert!(is_target_extension(Path::new("src/index.ts")));
    assert!(is_target_extension(Path::new("src/App.tsx")));
    assert!(is_target_extension(Path::new("scripts/run.py")));
  }

  #[test]
  fn test_target_extensions_case_insensitive() {
    assert!(is_target_extension(Path::new("src/index.TS")));
    assert!(is_target_extension(Path::new("src/App.Tsx")));
    assert!(is_target_extension(Path::new("scripts/run.PY")));
  }

  #[test]
  fn test_non_target_extensions() {
    assert!(!is_target_extension(Path::new("src/main.rs")));
    assert!(!is_target_extension(Path::new("README.md")));
    assert!(!is_target_extension(Path::new("Makefile")));
  }
}
