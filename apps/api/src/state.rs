use std::sync::Arc;

use crate::llm_client::GenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production, a test double in handler tests.
    pub llm: Arc<dyn GenerationService>,
}
