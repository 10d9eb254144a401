use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The analysis engine itself is stateless — only configuration
/// rides along.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
