use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An account that can author recipes, follow other users, like and comment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A freshly registered user together with the bearer token issued for it.
///
/// The token is only ever returned here; it is never part of [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Registration {
    pub user: User,
    pub token: String,
}
