//! Shared application state handed to every handler.

use std::sync::Arc;

use pantry_config::FeedConfig;
use pantry_db::service::PantryService;
use pantry_yummly::YummlyClient;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PantryService>,
    pub yummly: Arc<YummlyClient>,
    pub feed: FeedConfig,
}

impl AppState {
    #[must_use]
    pub fn new(service: PantryService, yummly: YummlyClient, feed: FeedConfig) -> Self {
        Self {
            service: Arc::new(service),
            yummly: Arc::new(yummly),
            feed,
        }
    }
}
