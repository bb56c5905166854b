use crate::catalog;
use crate::error::{LadderError, Result};
use crate::history::History;
use crate::level::{self, LevelInfo, TierStats};
use crate::progress::{MasterySummary, Progress};
use crate::score;
use crate::types::Mastery;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Exclusive owner of the progress store and the history ledger for one
/// running process. All mutation goes through [`Session::set_mastery`];
/// level and score are recomputed on demand and never persisted.
pub struct Session {
    root: PathBuf,
    progress: Progress,
    history: History,
}

impl Session {
    /// Load both stores from the data dir. Malformed state degrades to
    /// empty; an empty history is seeded with one sample carrying the
    /// score of whatever progress was loaded, and the seed is persisted
    /// immediately.
    pub fn open(root: &Path, now: DateTime<Utc>) -> Result<Self> {
        crate::io::ensure_dir(root)?;
        let progress = Progress::load(root);
        let mut history = History::load(root);
        if history.is_empty() {
            history = History::seed(score::compute_score(catalog::all(), &progress), now);
            history.save(root)?;
        }
        Ok(Self {
            root: root.to_path_buf(),
            progress,
            history,
        })
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn score(&self) -> u32 {
        score::compute_score(catalog::all(), &self.progress)
    }

    pub fn level(&self) -> LevelInfo {
        level::compute_level(catalog::all(), &self.progress)
    }

    pub fn tier_stats(&self) -> [TierStats; catalog::MAX_TIER as usize + 1] {
        level::tier_stats(catalog::all(), &self.progress)
    }

    pub fn summary(&self) -> MasterySummary {
        self.progress.summary(catalog::all())
    }

    /// The sole mutator. Updates the mastery entry, folds the fresh score
    /// into the history ledger, then persists both stores; the in-memory
    /// pair is consistent before anything touches disk. Returns the new
    /// score.
    pub fn set_mastery(&mut self, id: u32, mastery: Mastery, now: DateTime<Utc>) -> Result<u32> {
        if catalog::find(id).is_none() {
            return Err(LadderError::SkillNotFound(id));
        }
        self.progress.set(id, mastery);
        let new_score = score::compute_score(catalog::all(), &self.progress);
        self.history.record(new_score, now);
        self.progress.save(&self.root)?;
        self.history.save(&self.root)?;
        Ok(new_score)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn open_seeds_empty_history_from_current_progress() {
        let dir = TempDir::new().unwrap();
        // Three mastered tier-1 skills pre-exist; no history file.
        std::fs::write(
            dir.path().join(paths::PROGRESS_FILE),
            "1: MASTERED\n2: MASTERED\n3: MASTERED\n",
        )
        .unwrap();

        let session = Session::open(dir.path(), at(1, 9)).unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().last().unwrap().score, session.score());
        assert_eq!(session.score(), 30);
        // The seed is durable.
        assert!(dir.path().join(paths::HISTORY_FILE).exists());
    }

    #[test]
    fn open_on_fresh_dir_seeds_zero() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data");
        let session = Session::open(&root, at(1, 9)).unwrap();
        assert_eq!(session.history().last().unwrap().score, 0);
    }

    #[test]
    fn open_does_not_reseed_existing_history() {
        let dir = TempDir::new().unwrap();
        {
            let mut session = Session::open(dir.path(), at(1, 9)).unwrap();
            session.set_mastery(1, Mastery::Mastered, at(1, 10)).unwrap();
        }
        let session = Session::open(dir.path(), at(2, 9)).unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().last().unwrap().score, 10);
    }

    #[test]
    fn set_mastery_updates_score_and_history() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::open(dir.path(), at(1, 9)).unwrap();

        let score = session.set_mastery(42, Mastery::Basic, at(1, 10)).unwrap();
        assert_eq!(score, 30); // tier 6, half credit
        assert_eq!(session.history().last().unwrap().score, 30);

        // Same-day follow-up coalesces instead of appending.
        let score = session.set_mastery(42, Mastery::Mastered, at(1, 11)).unwrap();
        assert_eq!(score, 60);
        assert_eq!(session.history().len(), 1);

        // Next day appends.
        session.set_mastery(1, Mastery::Mastered, at(2, 9)).unwrap();
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn set_mastery_persists_both_stores() {
        let dir = TempDir::new().unwrap();
        {
            let mut session = Session::open(dir.path(), at(1, 9)).unwrap();
            session.set_mastery(7, Mastery::Mastered, at(1, 10)).unwrap();
        }
        let reloaded = Session::open(dir.path(), at(1, 12)).unwrap();
        assert_eq!(reloaded.progress().mastery(7), Mastery::Mastered);
        assert_eq!(reloaded.history().last().unwrap().score, 20);
    }

    #[test]
    fn set_mastery_rejects_unknown_id() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::open(dir.path(), at(1, 9)).unwrap();
        assert!(matches!(
            session.set_mastery(999, Mastery::Basic, at(1, 10)),
            Err(LadderError::SkillNotFound(999))
        ));
        // Nothing was recorded.
        assert_eq!(session.history().last().unwrap().score, 0);
    }

    #[test]
    fn malformed_history_self_heals_on_open() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(paths::PROGRESS_FILE), "19: BASIC\n").unwrap();
        std::fs::write(dir.path().join(paths::HISTORY_FILE), "not: [valid").unwrap();

        let session = Session::open(dir.path(), at(3, 9)).unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().last().unwrap().score, 10); // tier 2 basic
    }
}
