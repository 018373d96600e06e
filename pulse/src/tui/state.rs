//! TUI application state
//!
//! Pure data structures for the dashboard. No rendering logic here.
//! Ambient UI state (current tab, in-flight flag, current plan) is modeled
//! as an explicit phase machine instead of scattered flags, so invalid
//! combinations (e.g. two concurrent summarizations) cannot be represented.

use feedbackstore::{FeedbackEntry, MOOD_MAX, MOOD_MIN};
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::summary::{ActionPlan, SummarizeError};

/// Fun words for the in-flight summarization indicator
pub const STREAMING_WORDS: &[&str] = &[
    "Thinking",
    "Analyzing",
    "Pondering",
    "Distilling",
    "Synthesizing",
    "Reading the room",
];

/// Which tab is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Mood picker + comment form
    #[default]
    Submit,
    /// Histogram, recent comments, action plan
    Dashboard,
}

impl View {
    /// The other tab
    pub fn toggled(self) -> Self {
        match self {
            Self::Submit => Self::Dashboard,
            Self::Dashboard => Self::Submit,
        }
    }

    /// Display name for the header
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Submit => "Give Feedback",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// Controller phase machine
///
/// At most one summarization request may be outstanding; a second trigger
/// while one is pending is ignored, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing in flight
    #[default]
    Idle,
    /// An append is being applied
    Submitting,
    /// A summarization request is outstanding
    Summarizing,
    /// A derived plan is on screen
    ShowingPlan,
}

/// Action requested by a key handler, executed by the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Append the submitted form
    Submit { mood: u8, comment: String },
    /// Kick off a summarization request
    Summarize,
}

/// The submission form
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    /// Selected mood, None until the user picks one
    pub mood: Option<u8>,
    /// Comment text being typed
    pub comment: String,
}

impl SubmitForm {
    /// Move the mood selection up one level (or start at Okay)
    pub fn mood_up(&mut self) {
        self.mood = Some(match self.mood {
            None => 3,
            Some(m) => (m + 1).min(MOOD_MAX),
        });
    }

    /// Move the mood selection down one level (or start at Okay)
    pub fn mood_down(&mut self) {
        self.mood = Some(match self.mood {
            None => 3,
            Some(m) => (m - 1).max(MOOD_MIN),
        });
    }

    /// Both a mood and a non-empty comment are required
    pub fn is_complete(&self) -> bool {
        self.mood.is_some() && !self.comment.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.mood = None;
        self.comment.clear();
    }
}

/// Complete TUI state
#[derive(Debug)]
pub struct AppState {
    /// Current tab
    pub view: View,
    /// Controller phase
    pub phase: Phase,
    /// Snapshot of the entry collection, most-recent-first
    pub entries: Vec<FeedbackEntry>,
    /// Current derived plan, if any
    pub plan: Option<ActionPlan>,
    /// Submission form
    pub form: SubmitForm,
    /// Transient status line (errors and confirmations)
    pub status: Option<String>,
    /// Word shown while a summarization is in flight
    pub streaming_word: &'static str,
    /// Scroll offset into the comment list
    pub comment_scroll: usize,
    /// Whether the store is still writing to disk
    pub store_persistent: bool,
    /// Action for the runner to execute after key handling
    pub pending: Option<PendingAction>,
    /// Exit flag
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::default(),
            phase: Phase::default(),
            entries: Vec::new(),
            plan: None,
            form: SubmitForm::default(),
            status: None,
            streaming_word: STREAMING_WORDS[0],
            comment_scroll: 0,
            store_persistent: true,
            pending: None,
            should_quit: false,
        }
    }

    /// Take the action queued by the last key event, if any
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    /// Switch tabs; the dashboard stays viewable while a request is pending
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        self.status = None;
    }

    /// Clear any transient status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Try to enter the Summarizing phase
    ///
    /// Returns false (and leaves the state untouched) when a request is
    /// already outstanding.
    pub fn begin_summarize(&mut self) -> bool {
        if self.phase == Phase::Summarizing {
            debug!("begin_summarize: request already in flight, ignoring");
            return false;
        }
        self.phase = Phase::Summarizing;
        self.plan = None;
        self.streaming_word = STREAMING_WORDS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(STREAMING_WORDS[0]);
        true
    }

    /// Apply a summarization outcome
    ///
    /// Every outcome leaves the in-flight phase: success shows the plan,
    /// both error tiers fall back to Idle with a user-facing notice.
    pub fn finish_summarize(&mut self, result: Result<Option<ActionPlan>, SummarizeError>) {
        match result {
            Ok(Some(plan)) => {
                self.plan = Some(plan);
                self.phase = Phase::ShowingPlan;
            }
            Ok(None) => {
                self.phase = Phase::Idle;
                self.status = Some("No feedback to analyze yet".to_string());
            }
            Err(e) => {
                // Contract violations and transport failures share the
                // generic notice; the log already differentiates them.
                debug!(error = %e, "finish_summarize: failed");
                self.phase = Phase::Idle;
                self.status = Some("AI analysis failed. Please try again.".to_string());
            }
        }
    }

    /// Dismiss the current plan
    pub fn dismiss_plan(&mut self) {
        if self.phase == Phase::ShowingPlan {
            self.plan = None;
            self.phase = Phase::Idle;
        }
    }

    /// Replace the entry snapshot (after an append)
    pub fn set_entries(&mut self, entries: Vec<FeedbackEntry>) {
        self.entries = entries;
        self.comment_scroll = self.comment_scroll.min(self.entries.len().saturating_sub(1));
    }

    pub fn scroll_up(&mut self) {
        self.comment_scroll = self.comment_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.comment_scroll + 1 < self.entries.len() {
            self.comment_scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_summarize_rejects_concurrent_request() {
        let mut state = AppState::new();
        assert!(state.begin_summarize());
        assert_eq!(state.phase, Phase::Summarizing);
        assert!(!state.begin_summarize(), "second trigger must be ignored");
        assert_eq!(state.phase, Phase::Summarizing);
    }

    #[test]
    fn test_finish_summarize_success_shows_plan() {
        let mut state = AppState::new();
        state.begin_summarize();
        state.finish_summarize(Ok(Some(ActionPlan {
            themes: vec!["meetings".to_string()],
            points: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        })));
        assert_eq!(state.phase, Phase::ShowingPlan);
        assert!(state.plan.is_some());
    }

    #[test]
    fn test_finish_summarize_error_resets_in_flight_phase() {
        let mut state = AppState::new();
        state.begin_summarize();
        state.finish_summarize(Err(SummarizeError::InvalidResponse("nonsense".to_string())));
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.plan.is_none());
        assert!(state.status.is_some());
    }

    #[test]
    fn test_finish_summarize_no_op_resets_phase() {
        let mut state = AppState::new();
        state.begin_summarize();
        state.finish_summarize(Ok(None));
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_summarize_allowed_again_after_outcome() {
        let mut state = AppState::new();
        state.begin_summarize();
        state.finish_summarize(Ok(None));
        assert!(state.begin_summarize());
    }

    #[test]
    fn test_dismiss_plan_only_applies_when_showing() {
        let mut state = AppState::new();
        state.begin_summarize();
        state.dismiss_plan();
        assert_eq!(state.phase, Phase::Summarizing, "dismiss must not cancel a request");

        state.finish_summarize(Ok(Some(ActionPlan {
            themes: vec![],
            points: vec![],
        })));
        state.dismiss_plan();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.plan.is_none());
    }

    #[test]
    fn test_form_completion_rules() {
        let mut form = SubmitForm::default();
        assert!(!form.is_complete());
        form.comment = "something".to_string();
        assert!(!form.is_complete());
        form.mood = Some(4);
        assert!(form.is_complete());
        form.comment = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_mood_selection_clamps_to_range() {
        let mut form = SubmitForm::default();
        form.mood_up();
        assert_eq!(form.mood, Some(3));
        for _ in 0..10 {
            form.mood_up();
        }
        assert_eq!(form.mood, Some(5));
        for _ in 0..10 {
            form.mood_down();
        }
        assert_eq!(form.mood, Some(1));
    }
}
