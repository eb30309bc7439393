//! Project root resolution.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Return the directory two levels above `exe`: the parent of the directory
/// that holds the executable.
///
/// The tool is meant to live in a `scripts/` (or `bin/`) folder directly
/// under the project root.
///
/// # Errors
///
/// Returns an error if `exe` has fewer than two ancestors.
pub fn root_from_exe(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .with_context(|| format!("cannot derive project root from {}", exe.display()))
}

/// Resolve the project root.
///
/// An explicit `override_root` wins; otherwise the root is derived from the
/// canonical location of the running executable.  Failure here is fatal for
/// the whole run.
///
/// # Errors
///
/// Returns an error if the executable location cannot be determined or the
/// override does not name an existing directory.
pub fn resolve(override_root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        let root = dunce::canonicalize(root)
            .with_context(|| format!("project root does not exist: {}", root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("project root is not a directory: {}", root.display());
        }
        return Ok(root);
    }

    let exe = std::env::current_exe().context("cannot locate running executable")?;
    let exe = dunce::canonicalize(&exe)
        .with_context(|| format!("cannot resolve executable path: {}", exe.display()))?;
    root_from_exe(&exe)
}
