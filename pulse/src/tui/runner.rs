//! TUI Runner - main loop that owns the terminal, the store and the
//! summarizer
//!
//! The runner executes the PendingActions queued by key handling. Appends
//! are synchronous; summarization runs as a spawned task whose result
//! arrives over a channel polled on Tick, so existing data stays viewable
//! while a request is outstanding.

use std::sync::Arc;

use eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use feedbackstore::EntryStore;

use crate::summary::{ActionPlan, SummarizeError, Summarizer};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{PendingAction, Phase, View};
use super::views;

/// Tick rate for event polling and rendering (~30 FPS)
const TICK_RATE_MS: u64 = 33;

type SummaryResult = Result<Option<ActionPlan>, SummarizeError>;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state + key handling
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Feedback entry store
    store: EntryStore,
    /// Summarizer, None when no LLM is configured
    summarizer: Option<Arc<Summarizer>>,
    /// Event handler
    events: EventHandler,
    /// Summarization results from the spawned task
    result_rx: mpsc::UnboundedReceiver<SummaryResult>,
    result_tx: mpsc::UnboundedSender<SummaryResult>,
}

impl TuiRunner {
    /// Create a new runner
    pub fn new(terminal: Tui, store: EntryStore, summarizer: Option<Arc<Summarizer>>) -> Self {
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let mut app = App::new();
        app.state_mut().set_entries(store.entries().to_vec());
        app.state_mut().store_persistent = store.is_persistent();

        Self {
            app,
            terminal,
            store,
            summarizer,
            events: EventHandler::new(std::time::Duration::from_millis(TICK_RATE_MS)),
            result_rx,
            result_tx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.events.next().await? {
                Event::Tick => self.poll_summary_result(),
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                    self.execute_pending();
                }
                Event::Resize(_, _) => {}
            }

            if self.app.state().should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Execute the action queued by the last key event
    fn execute_pending(&mut self) {
        match self.app.state_mut().take_pending() {
            Some(PendingAction::Submit { mood, comment }) => self.apply_submit(mood, comment),
            Some(PendingAction::Summarize) => self.spawn_summarize(),
            None => {}
        }
    }

    /// Append synchronously, then land on the dashboard
    fn apply_submit(&mut self, mood: u8, comment: String) {
        let state = self.app.state_mut();
        match self.store.append(mood, comment) {
            Ok(_) => {
                state.set_entries(self.store.entries().to_vec());
                state.store_persistent = self.store.is_persistent();
                state.form.clear();
                state.phase = Phase::Idle;
                state.view = View::Dashboard;
                state.status = Some("Feedback recorded - thank you!".to_string());
            }
            Err(e) => {
                warn!(error = %e, "apply_submit: append failed");
                state.phase = Phase::Idle;
                state.status = Some(format!("Could not record feedback: {}", e));
            }
        }
    }

    /// Kick off the summarization task
    ///
    /// The phase machine guarantees at most one request in flight; the
    /// spawned task owns a snapshot of the entries.
    fn spawn_summarize(&mut self) {
        let Some(summarizer) = self.summarizer.clone() else {
            self.app.state_mut().status =
                Some("AI analysis is not configured (set the API key and restart)".to_string());
            return;
        };

        if !self.app.state_mut().begin_summarize() {
            return;
        }

        let entries = self.app.state().entries.clone();
        let tx = self.result_tx.clone();
        debug!(entry_count = entries.len(), "spawn_summarize: starting request");
        tokio::spawn(async move {
            let result = summarizer.summarize(&entries).await;
            let _ = tx.send(result);
        });
    }

    /// Apply any finished summarization
    fn poll_summary_result(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.app.state_mut().finish_summarize(result);
        }
    }
}
