//! TUI application - event handling and state transitions
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.
//! Store and summarizer side effects are queued as PendingActions and
//! executed by the runner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, PendingAction, Phase, View};

/// TUI application
#[derive(Debug, Default)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self { state: AppState::new() }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear any transient status message on key press
        self.state.clear_status();

        // Force quit works everywhere, including mid-request
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.state.view {
            View::Submit => self.handle_submit_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }

        self.state.should_quit
    }

    /// Keys on the submission form
    ///
    /// Printable characters go to the comment field, so tab switching and
    /// quitting use keys that never reach the field.
    fn handle_submit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.toggle_view(),
            KeyCode::Up => self.state.form.mood_up(),
            KeyCode::Down => self.state.form.mood_down(),
            KeyCode::Esc => self.state.form.clear(),
            KeyCode::Backspace => {
                self.state.form.comment.pop();
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Char(c) => self.state.form.comment.push(c),
            _ => {}
        }
    }

    /// Keys on the dashboard
    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.toggle_view(),
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('g') => self.request_summarize(),
            KeyCode::Char('x') | KeyCode::Esc => self.state.dismiss_plan(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            _ => {}
        }
    }

    /// Validate the form and queue the append
    fn submit_form(&mut self) {
        if !self.state.form.is_complete() {
            self.state.status = Some("Pick a mood and write a comment first".to_string());
            return;
        }

        let mood = self.state.form.mood.unwrap_or_default();
        let comment = self.state.form.comment.trim().to_string();
        self.state.phase = Phase::Submitting;
        self.state.pending = Some(PendingAction::Submit { mood, comment });
    }

    /// Queue a summarization unless one is already outstanding
    fn request_summarize(&mut self) {
        if self.state.phase == Phase::Summarizing {
            self.state.status = Some("Analysis already in progress".to_string());
            return;
        }
        if self.state.entries.is_empty() {
            self.state.status = Some("No feedback to analyze yet".to_string());
            return;
        }
        self.state.pending = Some(PendingAction::Summarize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedbackstore::FeedbackEntry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry() -> FeedbackEntry {
        FeedbackEntry {
            id: "e1".to_string(),
            mood: 3,
            comment: "fine".to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_typing_fills_the_comment() {
        let mut app = App::new();
        for c in "hi!".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.state().form.comment, "hi!");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state().form.comment, "hi");
    }

    #[test]
    fn test_enter_without_mood_does_not_submit() {
        let mut app = App::new();
        app.state_mut().form.comment = "something".to_string();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state().pending.is_none());
        assert!(app.state().status.is_some());
    }

    #[test]
    fn test_complete_form_queues_submit() {
        let mut app = App::new();
        app.state_mut().form.mood = Some(4);
        app.state_mut().form.comment = "  great week  ".to_string();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.state().pending,
            Some(PendingAction::Submit {
                mood: 4,
                comment: "great week".to_string()
            })
        );
        assert_eq!(app.state().phase, Phase::Submitting);
    }

    #[test]
    fn test_summarize_ignored_while_in_flight() {
        let mut app = App::new();
        app.state_mut().view = View::Dashboard;
        app.state_mut().set_entries(vec![entry()]);
        app.state_mut().phase = Phase::Summarizing;

        app.handle_key(key(KeyCode::Char('g')));
        assert!(app.state().pending.is_none(), "second trigger must not queue");
        assert!(app.state().status.is_some());
    }

    #[test]
    fn test_summarize_blocked_on_empty_entries() {
        let mut app = App::new();
        app.state_mut().view = View::Dashboard;
        app.handle_key(key(KeyCode::Char('g')));
        assert!(app.state().pending.is_none());
    }

    #[test]
    fn test_summarize_queued_from_dashboard() {
        let mut app = App::new();
        app.state_mut().view = View::Dashboard;
        app.state_mut().set_entries(vec![entry()]);
        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.state().pending, Some(PendingAction::Summarize));
    }

    #[test]
    fn test_q_quits_only_on_dashboard() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.state().should_quit, "'q' in the form is just text");
        assert_eq!(app.state().form.comment, "q");

        let mut app = App::new();
        app.state_mut().view = View::Dashboard;
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_tab_toggles_views() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().view, View::Dashboard);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().view, View::Submit);
    }
}
