use std::sync::Arc;

use crate::config::Config;
use crate::services::EventService;
use crate::store::EventStore;

/// Shared state handed to every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventService>,
}

impl AppState {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            events: Arc::new(EventService::new(store)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_sample_event {
            EventStore::with_sample_event()
        } else {
            EventStore::new()
        };
        Self::new(Arc::new(store))
    }
}
