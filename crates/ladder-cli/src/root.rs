use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolve the data directory.
///
/// Priority:
/// 1. `--root` flag / `LADDER_HOME` env var (passed in as `explicit`)
/// 2. `~/.ladder`
pub fn resolve_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    ladder_core::paths::default_root().context("failed to resolve data directory")
}
