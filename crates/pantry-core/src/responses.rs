//! Response payloads returned as JSON by the HTTP surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LikeState;
use crate::meal::MealTag;

/// Like state of the caller on one recipe, plus the recipe's like count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LikeStatus {
    pub recipe_id: String,
    pub state: LikeState,
    pub likes: u64,
}

/// Response from the time-based external feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimelyFeed {
    pub tag: MealTag,
    pub feed: serde_json::Value,
}

/// JSON error body used for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}
