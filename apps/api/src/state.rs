use std::sync::Arc;

use crate::config::Config;
use crate::guidance::gap::GapAnalyzer;
use crate::llm_client::GeminiClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session store. Sessions live for the process lifetime.
    pub sessions: SessionStore,
    pub llm: GeminiClient,
    pub config: Config,
    /// Pluggable gap analyzer. Default: WeightedGapAnalyzer. Swap via ENABLE_LLM_GAP_ANALYSIS env.
    pub gap_analyzer: Arc<dyn GapAnalyzer>,
}
