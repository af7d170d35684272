#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Header stamped onto the MIT-licensed SDK packages (client-ts, react).
pub const SDK_HEADER: &str = "// License: MIT. See .github/LICENSES/LICENSE_SDK.md\n";

/// Header stamped onto the BSL-licensed core packages (trustmath, next-auth).
pub const CORE_HEADER: &str = "// License: BSL 1.1. Commercial use prohibited. See .github/LICENSES/LICENSE_CORE.md\n";

/// Header stamped onto the ai-verification package.
pub const DATA_HEADER: &str = "// License: PolyForm Shield. AI Training Prohibited. See .github/LICENSES/LICENSE_DATA.md\n";

/// Writes a file at `rel` under `root`, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Writes a file under `packages/<package>/<rel>` below `root`.
pub fn write_package_file(root: &Path, package: &str, rel: &str, content: &str) -> Result<PathBuf> {
  write_file(root, &format!("packages/{}/{}", package, rel), content)
}

/// Reads a file back as a UTF-8 string.
pub fn read_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
