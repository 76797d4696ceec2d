use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A comment left on a recipe. A user may comment on the same recipe any
/// number of times.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
