//! Recipe update builder.

use pantry_core::errors::CoreError;
use serde::{Deserialize, Serialize};

/// Partial recipe update. Also the JSON body of `PUT`/`PATCH /recipes/{id}`;
/// author and creation time are not part of it and cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl RecipeUpdate {
    /// Whether no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
    }

    /// Reject updates that would blank out a required field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank title or category.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        Ok(())
    }
}
