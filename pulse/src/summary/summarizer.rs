//! Core Summarizer implementation

use std::sync::Arc;

use feedbackstore::FeedbackEntry;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::error::SummarizeError;
use super::plan::ActionPlan;
use crate::llm::{CompletionRequest, LlmClient};

/// Maximum themes kept in a plan
pub const MAX_THEMES: usize = 4;

/// A plan always carries exactly this many action points
pub const PLAN_POINTS: usize = 3;

/// Substituted when the service returns no themes
pub const FALLBACK_THEMES: [&str; 2] = ["Culture", "General"];

/// Pad the action points up to PLAN_POINTS when the service returns too few
pub const FALLBACK_POINTS: [&str; 3] = [
    "Continue listening to feedback",
    "Acknowledge team efforts",
    "Schedule a follow-up session",
];

/// Separator between serialized entries in the corpus
const ENTRY_DELIMITER: &str = "\n---\n";

const SYSTEM_PROMPT: &str = "Act as an expert HR consultant. Analyze the following anonymous employee \
     feedback and mood data.\n\
     1. Identify common themes/keywords (maximum 4).\n\
     2. Provide a concrete 3-point action plan for management to improve \
     company culture based ONLY on these comments.";

/// Derives action plans from feedback entries
///
/// Wraps an [`LlmClient`] and owns everything around the call: corpus
/// serialization, the instruction prompt, the response-shape constraint,
/// parsing, and the fallback policy.
pub struct Summarizer {
    llm: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl Summarizer {
    /// Create a summarizer on top of the given client
    pub fn new(llm: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        Self { llm, max_tokens }
    }

    /// Derive an action plan from the current entries
    ///
    /// Empty input is an upstream no-op: returns `Ok(None)` without issuing
    /// a request. On success the plan always has 1-4 themes and exactly 3
    /// points. Never fabricates a plan to mask an error.
    pub async fn summarize(&self, entries: &[FeedbackEntry]) -> Result<Option<ActionPlan>, SummarizeError> {
        if entries.is_empty() {
            debug!("summarize: no entries, declining to call the service");
            return Ok(None);
        }

        let request = CompletionRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            prompt: format!("Feedback Data:\n{}", corpus(entries)),
            response_schema: response_schema(),
            max_tokens: self.max_tokens,
        };

        debug!(entry_count = entries.len(), "summarize: sending request");
        let text = match self.llm.complete(request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "summarize: analysis call failed");
                return Err(e.into());
            }
        };

        match parse_plan(&text) {
            Ok(plan) => {
                info!(themes = plan.themes.len(), "summarize: plan derived");
                Ok(Some(plan))
            }
            Err(e) => {
                // Logged distinctly from transport failures
                warn!(error = %e, "summarize: response violated the contract");
                Err(e)
            }
        }
    }
}

/// Serialize entries into the prompt corpus, one line per entry,
/// order preserved (most-recent-first, as the store hands them over)
fn corpus(entries: &[FeedbackEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("[Mood: {}/5] {}", e.mood, e.comment))
        .collect::<Vec<_>>()
        .join(ENTRY_DELIMITER)
}

/// JSON shape the service must respond with
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "themes": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Top 3-4 recurring themes found in feedback."
            },
            "points": {
                "type": "array",
                "items": { "type": "string" },
                "description": "The 3 most important actions management should take."
            }
        },
        "required": ["themes", "points"]
    })
}

/// Raw payload shape; fields stay optional so missing data can be defaulted
#[derive(Debug, Deserialize)]
struct PlanPayload {
    themes: Option<Vec<String>>,
    points: Option<Vec<String>>,
}

/// Parse the response text and apply the fallback policy
///
/// Strict tier: non-JSON text or wrong-typed fields fail with
/// `InvalidResponse`. Lenient tier: absent or empty fields get fixed
/// defaults, oversized lists are truncated.
fn parse_plan(text: &str) -> Result<ActionPlan, SummarizeError> {
    let payload: PlanPayload =
        serde_json::from_str(text.trim()).map_err(|e| SummarizeError::InvalidResponse(e.to_string()))?;

    let mut themes = payload.themes.unwrap_or_default();
    if themes.is_empty() {
        themes = FALLBACK_THEMES.iter().map(|t| t.to_string()).collect();
    }
    themes.truncate(MAX_THEMES);

    let mut points = payload.points.unwrap_or_default();
    points.truncate(PLAN_POINTS);
    for fallback in FALLBACK_POINTS {
        if points.len() >= PLAN_POINTS {
            break;
        }
        points.push(fallback.to_string());
    }

    Ok(ActionPlan { themes, points })
}
