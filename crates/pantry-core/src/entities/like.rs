use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user's like on a recipe. At most one per (user, recipe).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub created_at: DateTime<Utc>,
}
