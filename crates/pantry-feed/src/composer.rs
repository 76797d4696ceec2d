//! Personalized feed: recipes authored by the users a viewer follows.

use std::cmp::Ordering;

use pantry_core::entities::Recipe;
use pantry_core::errors::CoreError;
use pantry_core::store::{FollowGraph, RecipeSource};

/// Newest first; equal timestamps fall back to ascending id.
fn feed_order(a: &Recipe, b: &Recipe) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}

/// Build the feed for `viewer_id`.
///
/// Returns every recipe whose author the viewer follows, newest first. When
/// the viewer follows nobody the recipe store is not queried.
///
/// # Errors
///
/// Returns [`CoreError::InvalidViewer`] if the viewer is unknown, or
/// [`CoreError::Storage`] if either accessor fails.
pub async fn compose_feed<S>(store: &S, viewer_id: &str) -> Result<Vec<Recipe>, CoreError>
where
    S: FollowGraph + RecipeSource + Sync,
{
    if !store.user_exists(viewer_id).await? {
        return Err(CoreError::InvalidViewer(viewer_id.to_string()));
    }

    let followees = store.followees(viewer_id).await?;
    if followees.is_empty() {
        tracing::debug!(viewer_id, "viewer follows nobody, empty feed");
        return Ok(Vec::new());
    }

    let authors: Vec<String> = followees.into_iter().collect();
    let mut recipes = store.recipes_by_authors(&authors).await?;
    recipes.sort_by(feed_order);

    tracing::debug!(viewer_id, followees = authors.len(), recipes = recipes.len(), "feed composed");
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryStore, at, recipe};
    use pretty_assertions::assert_eq;

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn feed_contains_only_followed_authors() {
        let store = MemoryStore::with_users(&["ana", "ben", "cleo"])
            .follow("ana", "ben")
            .recipes(vec![
                recipe("rcp-1", "ben", at(10)),
                recipe("rcp-2", "cleo", at(11)),
                recipe("rcp-3", "ana", at(12)),
            ]);

        let feed = compose_feed(&store, "ana").await.unwrap();
        assert_eq!(ids(&feed), vec!["rcp-1"]);
    }

    #[tokio::test]
    async fn feed_is_newest_first_with_id_tiebreak() {
        let store = MemoryStore::with_users(&["ana", "ben", "cleo"])
            .follow("ana", "ben")
            .follow("ana", "cleo")
            .recipes(vec![
                recipe("rcp-c", "ben", at(9)),
                recipe("rcp-b", "cleo", at(14)),
                recipe("rcp-a", "ben", at(14)),
                recipe("rcp-d", "cleo", at(11)),
            ]);

        let feed = compose_feed(&store, "ana").await.unwrap();
        assert_eq!(ids(&feed), vec!["rcp-a", "rcp-b", "rcp-d", "rcp-c"]);
    }

    #[tokio::test]
    async fn no_followees_skips_recipe_store() {
        let store = MemoryStore::with_users(&["ana", "ben"])
            .recipes(vec![recipe("rcp-1", "ben", at(10))]);

        let feed = compose_feed(&store, "ana").await.unwrap();
        assert!(feed.is_empty());
        assert_eq!(store.recipe_queries(), 0);
    }

    #[tokio::test]
    async fn unknown_viewer_is_rejected() {
        let store = MemoryStore::with_users(&["ana"]);
        let err = compose_feed(&store, "ghost").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidViewer(ref id) if id == "ghost"));
    }

    #[tokio::test]
    async fn follow_is_not_symmetric() {
        let store = MemoryStore::with_users(&["ana", "ben"])
            .follow("ana", "ben")
            .recipes(vec![recipe("rcp-1", "ana", at(10))]);

        assert!(compose_feed(&store, "ben").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let store = MemoryStore::with_users(&["ana", "ben"])
            .follow("ana", "ben")
            .failing_recipes();

        let err = compose_feed(&store, "ana").await.unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
    }
}
