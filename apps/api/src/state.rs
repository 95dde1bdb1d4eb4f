use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Document store. Postgres in production, in-memory for local runs and tests.
    pub store: Arc<dyn Store>,
    /// Text-generation provider used for career recommendations.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
