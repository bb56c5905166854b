use crate::error::Result;
use crate::paths;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on points handed to the chart renderer.
pub const MAX_CHART_POINTS: usize = 10;

// ---------------------------------------------------------------------------
// Sample
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub date: DateTime<Utc>,
    pub score: u32,
}

impl Sample {
    /// Calendar day of the sample, UTC date-only granularity.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Time-ordered score snapshots, at most one per calendar day. The current
/// instant is always injected by the caller; this module never reads the
/// system clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// One sample dated `now`; used on first load when no durable history
    /// exists yet.
    pub fn seed(score: u32, now: DateTime<Utc>) -> Self {
        Self {
            samples: vec![Sample { date: now, score }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Fold a fresh score into the ledger. Within a single calendar day the
    /// last sample is replaced (only the latest score of a day survives,
    /// and its timestamp bumps to `now`); a new day appends.
    pub fn record(&mut self, score: u32, now: DateTime<Utc>) {
        let sample = Sample { date: now, score };
        match self.samples.last_mut() {
            Some(last) if last.day() == sample.day() => *last = sample,
            _ => self.samples.push(sample),
        }
    }

    /// Read-only view for charting. A lone sample gets a synthetic zero
    /// point one day earlier so a growth line can always be drawn; long
    /// ledgers are strided down to roughly `MAX_CHART_POINTS`, always
    /// keeping the final (most recent) point.
    pub fn projection(&self) -> Vec<Sample> {
        if self.samples.is_empty() {
            return Vec::new();
        }
        let mut points = self.samples.clone();
        if points.len() == 1 {
            let first = points[0];
            points.insert(
                0,
                Sample {
                    date: first.date - Duration::days(1),
                    score: 0,
                },
            );
        }
        if points.len() > MAX_CHART_POINTS {
            let n = points.len();
            let stride = n.div_ceil(MAX_CHART_POINTS);
            points = points
                .into_iter()
                .enumerate()
                .filter(|(i, _)| i % stride == 0 || *i == n - 1)
                .map(|(_, s)| s)
                .collect();
        }
        points
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Load from the data dir; missing or malformed files yield an empty
    /// ledger, which the session re-seeds.
    pub fn load(root: &Path) -> Self {
        let path = paths::history_path(root);
        let data = match std::fs::read_to_string(&path) {
            Ok(d) => d,
            Err(_) => return Self::default(),
        };
        match serde_yaml::from_str(&data) {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("discarding malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::history_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
