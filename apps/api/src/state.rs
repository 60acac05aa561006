use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The completion collaborator behind a trait so tests swap in fakes.
    pub llm: Arc<dyn CompletionClient>,
    /// Startup configuration, kept alongside the clients built from it.
    #[allow(dead_code)]
    pub config: Config,
}
