use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Mastery
// ---------------------------------------------------------------------------

/// Learning status of one skill. Absence of an entry in the progress store
/// is equivalent to `Unknown`.
///
/// The durable form uses the upper-case tags `UNKNOWN`/`BASIC`/`MASTERED`;
/// any other tag collapses to `Unknown` when loading, so stale or corrupted
/// entries never abort a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mastery {
    #[default]
    Unknown,
    Basic,
    Mastered,
}

impl Mastery {
    pub fn all() -> &'static [Mastery] {
        &[Mastery::Unknown, Mastery::Basic, Mastery::Mastered]
    }

    /// Durable/wire tag.
    pub fn as_tag(self) -> &'static str {
        match self {
            Mastery::Unknown => "UNKNOWN",
            Mastery::Basic => "BASIC",
            Mastery::Mastered => "MASTERED",
        }
    }

    /// Lenient mapping used at the deserialization boundary.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BASIC" => Mastery::Basic,
            "MASTERED" => Mastery::Mastered,
            _ => Mastery::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mastery::Unknown => "unknown",
            Mastery::Basic => "basic",
            Mastery::Mastered => "mastered",
        }
    }

    /// Basic or better counts toward a tier's pass ratio.
    pub fn passes(self) -> bool {
        !matches!(self, Mastery::Unknown)
    }
}

impl From<String> for Mastery {
    fn from(s: String) -> Self {
        Mastery::from_tag(&s)
    }
}

impl From<Mastery> for String {
    fn from(m: Mastery) -> Self {
        m.as_tag().to_string()
    }
}

impl fmt::Display for Mastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mastery {
    type Err = crate::error::LadderError;

    /// Strict parse for user input; unlike the load boundary, a typo here
    /// is an error rather than a silent `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Mastery::Unknown),
            "basic" => Ok(Mastery::Basic),
            "mastered" => Ok(Mastery::Mastered),
            _ => Err(crate::error::LadderError::InvalidMastery(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
