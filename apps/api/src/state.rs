use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; the lexicons live in process-wide statics.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator with its augmentation backend fixed at startup.
    pub analyzer: Arc<Analyzer>,
}
