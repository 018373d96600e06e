//! CulturePulse - anonymous team feedback dashboard
//!
//! Collects anonymous mood+comment submissions, renders the mood
//! distribution and recent comments in a terminal dashboard, and turns the
//! accumulated feedback into a management action plan via a generative-text
//! service under a strict response contract.
//!
//! # Core Concepts
//!
//! - **Anonymity by design**: entries carry no author identity, and the
//!   derived action plan holds no reference back to individual entries
//! - **Local-first**: the whole collection lives in one JSON slot on disk,
//!   with an in-memory fallback when storage is unavailable
//! - **Strict response contract**: the AI response must parse as
//!   `{themes, points}`; missing data is defaulted, malformed structure
//!   is a hard error
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and provider implementations
//! - [`summary`] - Feedback corpus serialization and action plan derivation
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//! - [`tui`] - Terminal dashboard

pub mod cli;
pub mod config;
pub mod llm;
pub mod summary;
pub mod tui;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use llm::{CompletionRequest, LlmClient, LlmError, create_client};
pub use summary::{ActionPlan, SummarizeError, Summarizer};
