//! Storage accessor traits consumed by the feed core.
//!
//! The core never talks to a database directly. It is generic over these
//! traits; `pantry-db` implements them for `PantryService`, tests implement
//! them over in-memory collections.
//!
//! Like mutations are atomic on the storage side: `insert_like` must behave as
//! insert-if-absent and `delete_like` as delete-if-present, each reporting
//! whether a row changed. The core relies on that answer and does no locking
//! of its own.

use std::collections::HashSet;
use std::future::Future;

use crate::entities::Recipe;
use crate::errors::CoreError;

/// Social graph reads.
pub trait FollowGraph {
    /// Whether `user_id` resolves to a known user.
    fn user_exists(&self, user_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Identities `user_id` follows.
    fn followees(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<HashSet<String>, CoreError>> + Send;
}

/// Recipe store reads.
pub trait RecipeSource {
    /// All recipes whose author is in `author_ids`, in any order.
    fn recipes_by_authors(
        &self,
        author_ids: &[String],
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Whether a recipe with `recipe_id` exists.
    fn recipe_exists(&self, recipe_id: &str)
    -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Like set mutations with storage-enforced uniqueness.
pub trait LikeLedger {
    /// Insert the like if absent. Returns `true` when a row was created.
    fn insert_like(
        &self,
        user_id: &str,
        recipe_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Delete the like if present. Returns `true` when a row existed.
    fn delete_like(
        &self,
        user_id: &str,
        recipe_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Whether the like exists.
    fn has_like(
        &self,
        user_id: &str,
        recipe_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Number of likes on a recipe.
    fn count_likes(&self, recipe_id: &str) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
