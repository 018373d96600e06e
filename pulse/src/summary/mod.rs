//! Feedback summarization pipeline
//!
//! Turns the current entry collection into a structured ActionPlan by
//! delegating language understanding to a generative-text service under a
//! strict response contract. This module owns the corpus serialization, the
//! instruction prompt, and the two-tier error policy: lenient defaults for
//! missing data, hard failure for malformed structure.

mod error;
mod plan;
mod summarizer;

pub use error::SummarizeError;
pub use plan::ActionPlan;
pub use summarizer::{FALLBACK_POINTS, FALLBACK_THEMES, MAX_THEMES, PLAN_POINTS, Summarizer};
