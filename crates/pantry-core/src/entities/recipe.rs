use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A published recipe. `author_id` and `created_at` never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a recipe. The author comes from the caller's
/// identity, never from the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
}

impl NewRecipe {
    /// Reject recipes without a title or category.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`](crate::errors::CoreError::Validation)
    /// naming the first blank field.
    pub fn validate(&self) -> Result<(), crate::errors::CoreError> {
        if self.title.trim().is_empty() {
            return Err(crate::errors::CoreError::Validation(
                "title must not be empty".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(crate::errors::CoreError::Validation(
                "category must not be empty".into(),
            ));
        }
        Ok(())
    }
}
