//! Recipe CRUD. Only the author may modify or delete a recipe.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use pantry_core::entities::{NewRecipe, Recipe};
use pantry_core::errors::CoreError;
use pantry_db::repos::recipe::RecipeFilter;
use pantry_db::updates::recipe::RecipeUpdate;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery, CurrentUser};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    /// Author username.
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

async fn load_recipe(state: &AppState, recipe_id: &str) -> Result<Recipe, CoreError> {
    state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(|e| e.into_core("recipe", recipe_id))
}

async fn load_owned_recipe(
    state: &AppState,
    recipe_id: &str,
    user_id: &str,
) -> Result<Recipe, CoreError> {
    let recipe = load_recipe(state, recipe_id).await?;
    if recipe.author_id != user_id {
        return Err(CoreError::Forbidden(format!(
            "recipe {recipe_id} belongs to another user"
        )));
    }
    Ok(recipe)
}

/// `GET /recipes`
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let filter = RecipeFilter {
        category: query.category,
        author_username: query.author,
    };
    Ok(Json(state.service.list_recipes(&filter).await?))
}

/// `POST /recipes`: the caller becomes the author.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiJson(recipe): ApiJson<NewRecipe>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    recipe.validate()?;
    let created = state.service.create_recipe(&viewer.id, &recipe).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /recipes/{id}`
pub async fn get(
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<String>,
) -> ApiResult<Json<Recipe>> {
    Ok(Json(load_recipe(&state, &recipe_id).await?))
}

/// `PUT`/`PATCH /recipes/{id}`: partial update of the caller's recipe.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
    ApiJson(update): ApiJson<RecipeUpdate>,
) -> ApiResult<Json<Recipe>> {
    update.validate()?;
    load_owned_recipe(&state, &recipe_id, &viewer.id).await?;
    let updated = state
        .service
        .update_recipe(&recipe_id, update)
        .await
        .map_err(|e| e.into_core("recipe", &recipe_id))?;
    Ok(Json(updated))
}

/// `DELETE /recipes/{id}`
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    load_owned_recipe(&state, &recipe_id, &viewer.id).await?;
    if !state.service.delete_recipe(&recipe_id).await? {
        return Err(CoreError::not_found("recipe", &recipe_id).into());
    }
    tracing::info!(recipe_id, "recipe deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /me/recipes?search=`: the caller's own recipes.
pub async fn mine(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let recipes = state
        .service
        .list_recipes_by_author(&viewer.id, query.search.as_deref())
        .await?;
    Ok(Json(recipes))
}
