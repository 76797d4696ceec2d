//! Defaults for the external feeds.

use serde::{Deserialize, Serialize};

const fn default_timely_limit() -> u32 {
    5
}

const fn default_search_max_results() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Start offset for the time-based feed when the request gives none.
    #[serde(default)]
    pub timely_start: u32,

    /// Number of items in the time-based feed when the request gives none.
    #[serde(default = "default_timely_limit")]
    pub timely_limit: u32,

    /// `maxResult` sent to Yummly search when the request gives none.
    #[serde(default = "default_search_max_results")]
    pub search_max_results: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            timely_start: 0,
            timely_limit: default_timely_limit(),
            search_max_results: default_search_max_results(),
        }
    }
}
