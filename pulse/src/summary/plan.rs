//! Action plan type

use serde::{Deserialize, Serialize};

/// Derived structured summary of the current feedback
///
/// Transient: recomputed on demand from a snapshot of all entries, never
/// persisted, and holds no reference back to individual entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    /// Recurring topics extracted from the feedback, 1-4 after post-processing
    pub themes: Vec<String>,

    /// Actionable recommendations for management, always exactly 3
    pub points: Vec<String>,
}
