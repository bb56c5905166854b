use crate::catalog::{Skill, MAX_TIER, MIN_TIER};
use crate::progress::Progress;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Thresholds and titles
// ---------------------------------------------------------------------------

/// A tier is passed once at least this fraction of its skills are basic
/// or better.
pub const PASS_THRESHOLD: f64 = 0.8;

/// The current tier earns a `+` once strictly more than this fraction of
/// its skills are fully mastered.
pub const STRONG_THRESHOLD: f64 = 0.7;

/// Titles indexed by tier; index 0 doubles as the out-of-range default.
const TITLES: [&str; 8] = [
    "羽外高人", // 0
    "羽焉不详", // 1
    "羽过拔毛", // 2
    "佳羽有约", // 3
    "羽不自禁", // 4
    "春风化羽", // 5
    "羽翼丰满", // 6
    "呼风唤羽", // 7+
];

/// Total lookup: tiers beyond the table clamp to the last entry.
pub fn title_for(tier: u8) -> &'static str {
    TITLES[usize::from(tier).min(TITLES.len() - 1)]
}

// ---------------------------------------------------------------------------
// TierStats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierStats {
    pub total: u32,
    /// Basic or mastered.
    pub passed: u32,
    pub mastered: u32,
}

impl TierStats {
    pub fn pass_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.passed) / f64::from(self.total)
        }
    }

    pub fn mastered_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.mastered) / f64::from(self.total)
        }
    }

    /// Ladder-view completion percent: full credit for mastered, half for
    /// basic, rounded to the nearest whole percent.
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let basic = self.passed - self.mastered;
        let weighted = f64::from(self.mastered) + f64::from(basic) * 0.5;
        (weighted / f64::from(self.total) * 100.0).round() as u32
    }
}

/// Per-tier counts, indexed by tier (index 0 unused). Skills whose tier
/// falls outside 1..=6 are skipped rather than panicking.
pub fn tier_stats(skills: &[Skill], progress: &Progress) -> [TierStats; MAX_TIER as usize + 1] {
    let mut stats = [TierStats::default(); MAX_TIER as usize + 1];
    for skill in skills {
        if !(MIN_TIER..=MAX_TIER).contains(&skill.tier) {
            continue;
        }
        let entry = &mut stats[usize::from(skill.tier)];
        entry.total += 1;
        let mastery = progress.mastery(skill.id);
        if mastery.passes() {
            entry.passed += 1;
        }
        if mastery == crate::types::Mastery::Mastered {
            entry.mastered += 1;
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// LevelInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelInfo {
    /// 0 when no tier has been passed yet.
    pub tier: u8,
    pub strong: bool,
    pub title: &'static str,
    /// e.g. "中羽 3+ 级".
    pub display_label: String,
}

/// Walk tiers in increasing order; a populated tier must reach the pass
/// threshold for the walk to continue, and the first failure halts the scan
/// outright — later tiers are never considered even if they would pass on
/// their own. Tiers with no skills are vacuously passed and skipped.
pub fn compute_level(skills: &[Skill], progress: &Progress) -> LevelInfo {
    let stats = tier_stats(skills, progress);

    let mut tier = 0u8;
    for t in MIN_TIER..=MAX_TIER {
        let s = stats[usize::from(t)];
        if s.total == 0 {
            continue;
        }
        if s.pass_ratio() >= PASS_THRESHOLD {
            tier = t;
        } else {
            break;
        }
    }

    let current = stats[usize::from(tier)];
    let strong = current.total > 0 && current.mastered_ratio() > STRONG_THRESHOLD;

    LevelInfo {
        tier,
        strong,
        title: title_for(tier),
        display_label: format!("中羽 {}{} 级", tier, if strong { "+" } else { "" }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
