use crate::catalog::Skill;
use crate::error::Result;
use crate::paths;
use crate::types::Mastery;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// MasterySummary
// ---------------------------------------------------------------------------

/// Counts over a catalog slice; `total` is the number of catalog skills,
/// not the number of stored entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MasterySummary {
    pub total: u32,
    pub mastered: u32,
    pub basic: u32,
    pub unknown: u32,
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Mapping skill id → mastery. Only ids the user has touched are present;
/// an absent id reads as `Unknown`. Stale ids (skills no longer in the
/// catalog) are carried harmlessly and ignored by every consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    entries: BTreeMap<u32, Mastery>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mastery(&self, id: u32) -> Mastery {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    /// Insert or replace a single entry. The session layer is responsible
    /// for validating the id and persisting afterwards.
    pub fn set(&mut self, id: u32, mastery: Mastery) {
        self.entries.insert(id, mastery);
    }

    pub fn summary(&self, skills: &[Skill]) -> MasterySummary {
        let mut summary = MasterySummary {
            total: skills.len() as u32,
            ..Default::default()
        };
        for skill in skills {
            match self.mastery(skill.id) {
                Mastery::Mastered => summary.mastered += 1,
                Mastery::Basic => summary.basic += 1,
                Mastery::Unknown => summary.unknown += 1,
            }
        }
        summary
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Load from the data dir. A missing file is a normal first run; a
    /// malformed file is discarded with a diagnostic. Neither is an error.
    pub fn load(root: &Path) -> Self {
        let path = paths::progress_path(root);
        let data = match std::fs::read_to_string(&path) {
            Ok(d) => d,
            Err(_) => return Self::default(),
        };
        match serde_yaml::from_str(&data) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!("discarding malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::progress_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use tempfile::TempDir;

    #[test]
    fn absent_id_reads_unknown() {
        let progress = Progress::new();
        assert_eq!(progress.mastery(1), Mastery::Unknown);
    }

    #[test]
    fn set_replaces_entry() {
        let mut progress = Progress::new();
        progress.set(7, Mastery::Basic);
        progress.set(7, Mastery::Mastered);
        assert_eq!(progress.mastery(7), Mastery::Mastered);
    }

    #[test]
    fn roundtrip_through_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut progress = Progress::new();
        progress.set(1, Mastery::Mastered);
        progress.set(19, Mastery::Basic);
        progress.save(dir.path()).unwrap();

        let loaded = Progress::load(dir.path());
        assert_eq!(loaded, progress);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(Progress::load(dir.path()).is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(paths::PROGRESS_FILE), "[: not yaml").unwrap();
        assert!(Progress::load(dir.path()).is_empty());
    }

    #[test]
    fn stale_tag_loads_as_unknown() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(paths::PROGRESS_FILE),
            "1: MASTERED\n2: SOMETHING_ELSE\n",
        )
        .unwrap();
        let loaded = Progress::load(dir.path());
        assert_eq!(loaded.mastery(1), Mastery::Mastered);
        assert_eq!(loaded.mastery(2), Mastery::Unknown);
    }

    #[test]
    fn summary_counts() {
        let mut progress = Progress::new();
        progress.set(1, Mastery::Mastered);
        progress.set(2, Mastery::Mastered);
        progress.set(3, Mastery::Basic);
        let summary = progress.summary(catalog::all());
        assert_eq!(summary.total, 42);
        assert_eq!(summary.mastered, 2);
        assert_eq!(summary.basic, 1);
        assert_eq!(summary.unknown, 39);
    }
}
