//! `pantry_core::store` accessor traits implemented over the repositories.
//!
//! Storage failures surface as `CoreError::Storage`.

use std::collections::HashSet;

use pantry_core::entities::Recipe;
use pantry_core::errors::CoreError;
use pantry_core::store::{FollowGraph, LikeLedger, RecipeSource};

use crate::service::PantryService;

impl FollowGraph for PantryService {
    async fn user_exists(&self, user_id: &str) -> Result<bool, CoreError> {
        Ok(Self::user_exists(self, user_id).await?)
    }

    async fn followees(&self, user_id: &str) -> Result<HashSet<String>, CoreError> {
        Ok(self.followee_ids(user_id).await?.into_iter().collect())
    }
}

impl RecipeSource for PantryService {
    async fn recipes_by_authors(&self, author_ids: &[String]) -> Result<Vec<Recipe>, CoreError> {
        Ok(Self::recipes_by_authors(self, author_ids).await?)
    }

    async fn recipe_exists(&self, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(Self::recipe_exists(self, recipe_id).await?)
    }
}

impl LikeLedger for PantryService {
    async fn insert_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(Self::insert_like(self, user_id, recipe_id).await?)
    }

    async fn delete_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(Self::delete_like(self, user_id, recipe_id).await?)
    }

    async fn has_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(Self::has_like(self, user_id, recipe_id).await?)
    }

    async fn count_likes(&self, recipe_id: &str) -> Result<u64, CoreError> {
        Ok(Self::count_likes(self, recipe_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use pantry_core::store::{FollowGraph, LikeLedger, RecipeSource};

    use crate::test_support::{publish, register, test_service};

    #[tokio::test]
    async fn follow_graph_reads_edges() {
        let svc = test_service().await;
        let ana = register(&svc, "ana").await;
        let ben = register(&svc, "ben").await;
        svc.follow(&ana.id, &ben.id).await.unwrap();

        assert!(FollowGraph::user_exists(&svc, &ana.id).await.unwrap());
        assert!(!FollowGraph::user_exists(&svc, "usr-00000000").await.unwrap());
        let followees = FollowGraph::followees(&svc, &ana.id).await.unwrap();
        assert!(followees.contains(&ben.id));
        assert_eq!(followees.len(), 1);
    }

    #[tokio::test]
    async fn recipe_source_and_ledger_roundtrip() {
        let svc = test_service().await;
        let ana = register(&svc, "ana").await;
        let recipe = publish(&svc, &ana, "Dal", "main").await;

        assert!(RecipeSource::recipe_exists(&svc, &recipe.id).await.unwrap());
        let by_author = RecipeSource::recipes_by_authors(&svc, &[ana.id.clone()])
            .await
            .unwrap();
        assert_eq!(by_author, vec![recipe.clone()]);

        assert!(LikeLedger::insert_like(&svc, &ana.id, &recipe.id).await.unwrap());
        assert!(LikeLedger::has_like(&svc, &ana.id, &recipe.id).await.unwrap());
        assert_eq!(LikeLedger::count_likes(&svc, &recipe.id).await.unwrap(), 1);
        assert!(LikeLedger::delete_like(&svc, &ana.id, &recipe.id).await.unwrap());
    }
}
