use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Catalogs are static, so configuration is all handlers need.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
