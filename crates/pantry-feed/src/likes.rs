//! Like/unlike transitions for a (user, recipe) pair.
//!
//! The prior state is never read separately. `insert_like` and `delete_like`
//! are atomic on the storage side and their answer tells which transition
//! happened: a like that created no row means the pair was already liked, an
//! unlike that removed no row means it was not liked.

use pantry_core::enums::{LikeAction, LikeState};
use pantry_core::errors::CoreError;
use pantry_core::responses::LikeStatus;
use pantry_core::store::{LikeLedger, RecipeSource};

async fn ensure_recipe<S>(store: &S, recipe_id: &str) -> Result<(), CoreError>
where
    S: RecipeSource + Sync,
{
    if store.recipe_exists(recipe_id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found("recipe", recipe_id))
    }
}

async fn status_after<S>(store: &S, recipe_id: &str, state: LikeState) -> Result<LikeStatus, CoreError>
where
    S: LikeLedger + Sync,
{
    Ok(LikeStatus {
        recipe_id: recipe_id.to_string(),
        state,
        likes: store.count_likes(recipe_id).await?,
    })
}

/// Move the pair from `NotLiked` to `Liked`.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if the recipe does not exist,
/// [`CoreError::AlreadyLiked`] if the pair was already liked, or
/// [`CoreError::Storage`].
pub async fn like<S>(store: &S, user_id: &str, recipe_id: &str) -> Result<LikeStatus, CoreError>
where
    S: LikeLedger + RecipeSource + Sync,
{
    ensure_recipe(store, recipe_id).await?;
    let created = store.insert_like(user_id, recipe_id).await?;
    let state = LikeState::from_exists(!created).apply(LikeAction::Like, user_id, recipe_id)?;
    tracing::debug!(user_id, recipe_id, "recipe liked");
    status_after(store, recipe_id, state).await
}

/// Move the pair from `Liked` to `NotLiked`.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if the recipe does not exist,
/// [`CoreError::NotLiked`] if the pair was not liked, or
/// [`CoreError::Storage`].
pub async fn unlike<S>(store: &S, user_id: &str, recipe_id: &str) -> Result<LikeStatus, CoreError>
where
    S: LikeLedger + RecipeSource + Sync,
{
    ensure_recipe(store, recipe_id).await?;
    let existed = store.delete_like(user_id, recipe_id).await?;
    let state = LikeState::from_exists(existed).apply(LikeAction::Unlike, user_id, recipe_id)?;
    tracing::debug!(user_id, recipe_id, "recipe unliked");
    status_after(store, recipe_id, state).await
}

/// Current state of the pair.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if the recipe does not exist, or
/// [`CoreError::Storage`].
pub async fn like_state<S>(store: &S, user_id: &str, recipe_id: &str) -> Result<LikeState, CoreError>
where
    S: LikeLedger + RecipeSource + Sync,
{
    ensure_recipe(store, recipe_id).await?;
    Ok(LikeState::from_exists(store.has_like(user_id, recipe_id).await?))
}

/// Current state of the pair together with the recipe's like count.
///
/// # Errors
///
/// Same as [`like_state`].
pub async fn like_status<S>(store: &S, user_id: &str, recipe_id: &str) -> Result<LikeStatus, CoreError>
where
    S: LikeLedger + RecipeSource + Sync,
{
    let state = like_state(store, user_id, recipe_id).await?;
    status_after(store, recipe_id, state).await
}
