use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Directed social graph edge: `follower_id` follows `followee_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Follow {
    pub id: String,
    pub follower_id: String,
    pub followee_id: String,
    pub created_at: DateTime<Utc>,
}
