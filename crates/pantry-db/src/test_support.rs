//! Shared test utilities for pantry-db tests.

use pantry_core::entities::{NewRecipe, Recipe, User};

use crate::PantryDb;
use crate::service::PantryService;

/// Create an in-memory `PantryService`.
pub async fn test_service() -> PantryService {
    let db = PantryDb::open_local(":memory:").await.unwrap();
    PantryService::from_db(db)
}

/// Register a user and return it (token discarded).
pub async fn register(svc: &PantryService, username: &str) -> User {
    svc.create_user(username).await.unwrap().unwrap().user
}

/// Publish a recipe with the given title and category.
pub async fn publish(svc: &PantryService, author: &User, title: &str, category: &str) -> Recipe {
    svc.create_recipe(
        &author.id,
        &NewRecipe {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}
