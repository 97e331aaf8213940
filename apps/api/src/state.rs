use std::sync::Arc;

use crate::config::Config;
use crate::interview::store::InterviewStore;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum
/// extractors.
///
/// Both the store and the completion client are held behind trait objects —
/// the orchestrator never depends on Postgres or Gemini directly.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InterviewStore>,
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
