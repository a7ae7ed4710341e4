use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::providers::ProviderSet;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub providers: Arc<ProviderSet>,
    /// Process start, for the status endpoint's uptime report.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, providers: ProviderSet) -> Self {
        Self {
            config: Arc::new(config),
            providers: Arc::new(providers),
            started_at: Instant::now(),
        }
    }
}
