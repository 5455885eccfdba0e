pub mod config;
pub mod parse;
pub mod prompt;
pub mod rest;
pub mod upstream;

use std::sync::Arc;

use config::ServiceConfig;
use upstream::ModelClient;

/// Shared application state passed to every request handler.
///
/// Read-only after startup — requests share the config and one HTTP client,
/// nothing else, so handlers need no coordination.
pub struct AppContext {
    pub config: Arc<ServiceConfig>,
    pub upstream: ModelClient,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let upstream = ModelClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            upstream,
            started_at: std::time::Instant::now(),
        })
    }
}
