//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::DailyCache;
use crate::closures::ClosureConfig;
use crate::rasp::RaspClient;

/// Shared application state.
///
/// The cache is owned here and injected into handlers rather than
/// living in a global, so tests can build isolated states.
#[derive(Clone)]
pub struct AppState {
    /// Schedule API client
    pub rasp: Arc<RaspClient>,

    /// Per-day result cache
    pub cache: Arc<DailyCache>,

    /// Closure window offsets
    pub closures: Arc<ClosureConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(rasp: RaspClient, cache: DailyCache, closures: ClosureConfig) -> Self {
        Self {
            rasp: Arc::new(rasp),
            cache: Arc::new(cache),
            closures: Arc::new(closures),
        }
    }
}
