//! Feedback entry value objects
//!
//! A FeedbackEntry is created once at submission and never mutated.
//! The serde shape matches the persisted slot: `{id, mood, comment, timestamp}`.

use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::{MOOD_MAX, MOOD_MIN};

/// The five fixed mood levels, ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mood {
    Awful,
    Bad,
    Okay,
    Good,
    Great,
}

impl Mood {
    /// All levels in mood-ascending order (chart rendering relies on this)
    pub const ALL: [Mood; 5] = [Mood::Awful, Mood::Bad, Mood::Okay, Mood::Good, Mood::Great];

    /// Numeric value in [1,5]
    pub fn value(self) -> u8 {
        match self {
            Mood::Awful => 1,
            Mood::Bad => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Great => 5,
        }
    }

    /// Parse a numeric mood value, rejecting anything outside [1,5]
    pub fn from_value(value: u8) -> Option<Mood> {
        match value {
            1 => Some(Mood::Awful),
            2 => Some(Mood::Bad),
            3 => Some(Mood::Okay),
            4 => Some(Mood::Good),
            5 => Some(Mood::Great),
            _ => None,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Mood::Awful => "Awful",
            Mood::Bad => "Bad",
            Mood::Okay => "Okay",
            Mood::Good => "Good",
            Mood::Great => "Great",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single anonymous mood+comment submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Opaque unique ID, assigned at creation
    pub id: String,

    /// Mood value in [1,5]
    pub mood: u8,

    /// Free-form comment text, non-empty
    pub comment: String,

    /// Creation time (unix ms, wall clock - not guaranteed monotonic)
    pub timestamp: i64,
}

impl FeedbackEntry {
    /// Create a new entry with a generated ID and the current timestamp
    ///
    /// Rejects out-of-range moods and empty comments; these invariants are
    /// enforced at creation so the rest of the system can rely on them.
    pub fn new(mood: u8, comment: impl Into<String>) -> Result<Self> {
        let comment = comment.into();
        if !(MOOD_MIN..=MOOD_MAX).contains(&mood) {
            return Err(eyre::eyre!("Mood must be between {} and {}, got {}", MOOD_MIN, MOOD_MAX, mood));
        }
        if comment.trim().is_empty() {
            return Err(eyre::eyre!("Comment must not be empty"));
        }
        Ok(Self {
            id: uuid::Uuid::now_v7().to_string(),
            mood,
            comment,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }

    /// Mood level for this entry, None if the stored value is out of range
    pub fn mood_level(&self) -> Option<Mood> {
        Mood::from_value(self.mood)
    }
}
