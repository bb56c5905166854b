use crate::error::{LadderError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Data directory constants
// ---------------------------------------------------------------------------

pub const DATA_DIR_NAME: &str = ".ladder";
pub const ROOT_ENV: &str = "LADDER_HOME";

pub const PROGRESS_FILE: &str = "progress.yaml";
pub const HISTORY_FILE: &str = "history.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn progress_path(root: &Path) -> PathBuf {
    root.join(PROGRESS_FILE)
}

pub fn history_path(root: &Path) -> PathBuf {
    root.join(HISTORY_FILE)
}

/// Default data directory: `~/.ladder`.
pub fn default_root() -> Result<PathBuf> {
    home::home_dir()
        .map(|h| h.join(DATA_DIR_NAME))
        .ok_or(LadderError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/ladder");
        assert_eq!(
            progress_path(root),
            PathBuf::from("/tmp/ladder/progress.yaml")
        );
        assert_eq!(history_path(root), PathBuf::from("/tmp/ladder/history.yaml"));
    }
}
