//! Core EntryStore implementation

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, info, warn};

use crate::entry::FeedbackEntry;

/// The feedback entry store
///
/// Owns the ordered collection (most-recent-first) and the single JSON slot
/// it persists to. The slot is rewritten in full on every append. If the
/// slot cannot be read or written the store degrades to in-memory-only for
/// the session instead of failing; the dashboard stays usable without
/// durable storage.
pub struct EntryStore {
    /// Path to the JSON slot
    path: PathBuf,
    /// Current ordered collection, most-recent-first
    entries: Vec<FeedbackEntry>,
    /// Whether writes still go to disk
    persistent: bool,
}

impl EntryStore {
    /// Open the store at the given slot path
    ///
    /// First use (no slot on disk) seeds a fixed sample set so the dashboard
    /// is non-empty for a new user. An unreadable or corrupt slot degrades
    /// to in-memory-only for the session; the broken file is left untouched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!(?path, "No existing slot, seeding sample entries");
            let mut store = Self {
                path,
                entries: seed_entries(),
                persistent: true,
            };
            store.persist();
            return Ok(store);
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<FeedbackEntry>>(&content) {
                Ok(entries) => {
                    debug!(?path, count = entries.len(), "Opened entry store");
                    Ok(Self {
                        path,
                        entries,
                        persistent: true,
                    })
                }
                Err(e) => {
                    warn!(?path, error = %e, "Slot is corrupt, falling back to in-memory store");
                    Ok(Self {
                        path,
                        entries: seed_entries(),
                        persistent: false,
                    })
                }
            },
            Err(e) => {
                warn!(?path, error = %e, "Slot is unreadable, falling back to in-memory store");
                Ok(Self {
                    path,
                    entries: seed_entries(),
                    persistent: false,
                })
            }
        }
    }

    /// Append a new submission
    ///
    /// Assigns id and timestamp, inserts at the front (most-recent-first)
    /// and persists the updated collection synchronously before returning.
    pub fn append(&mut self, mood: u8, comment: impl Into<String>) -> Result<FeedbackEntry> {
        let entry = FeedbackEntry::new(mood, comment).context("Invalid feedback entry")?;
        self.entries.insert(0, entry.clone());
        self.persist();
        info!(id = %entry.id, mood = entry.mood, "Appended feedback entry");
        Ok(entry)
    }

    /// The current ordered collection, most-recent-first
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    /// Whether writes are still reaching the slot
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Path of the backing slot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Administrative reset: drop all entries and rewrite the slot
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist();
        info!("Cleared all feedback entries");
        Ok(())
    }

    /// Rewrite the whole slot; a failure flips the store to in-memory mode
    fn persist(&mut self) {
        if !self.persistent {
            return;
        }
        if let Err(e) = self.write_slot() {
            warn!(path = ?self.path, error = %e, "Persist failed, continuing in-memory only");
            self.persistent = false;
        }
    }

    fn write_slot(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }
        let content = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, content).context("Failed to write slot")?;
        Ok(())
    }
}

/// Fixed bootstrap data for a fresh store
fn seed_entries() -> Vec<FeedbackEntry> {
    const DAY_MS: i64 = 86_400_000;
    let now = chrono::Utc::now().timestamp_millis();
    let samples = [
        (4u8, "I love the flexible work hours!"),
        (2, "Meetings are taking up too much time lately."),
        (5, "The new coffee machine is a great addition."),
        (3, "Communication between departments could be smoother."),
    ];

    samples
        .iter()
        .enumerate()
        .map(|(i, (mood, comment))| FeedbackEntry {
            id: uuid::Uuid::now_v7().to_string(),
            mood: *mood,
            comment: (*comment).to_string(),
            timestamp: now - DAY_MS * (i as i64 + 1),
        })
        .collect()
}
