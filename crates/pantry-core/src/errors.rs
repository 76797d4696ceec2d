//! Cross-cutting error types for Pantry.
//!
//! These are the errors the feed core surfaces to the boundary layer.
//! Crate-specific errors (`DatabaseError`, `YummlyError`, `ConfigError`) live in
//! their own crates; storage failures reach the core as [`CoreError::Storage`].

use thiserror::Error;

/// Errors raised by the feed core and the storage accessor traits.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The viewer identity does not resolve to a known user.
    #[error("Invalid viewer: {0}")]
    InvalidViewer(String),

    /// Like on a (user, recipe) pair that is already liked.
    #[error("Recipe {recipe_id} is already liked by {user_id}")]
    AlreadyLiked { user_id: String, recipe_id: String },

    /// Unlike on a (user, recipe) pair that is not liked.
    #[error("Recipe {recipe_id} is not liked by {user_id}")]
    NotLiked { user_id: String, recipe_id: String },

    /// Follow edge already exists for the ordered pair.
    #[error("{follower_id} already follows {followee_id}")]
    AlreadyFollowing {
        follower_id: String,
        followee_id: String,
    },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The caller is authenticated but may not touch this entity.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The storage layer failed.
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
