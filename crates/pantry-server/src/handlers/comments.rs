//! Comments on a recipe.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use pantry_core::entities::Comment;
use pantry_core::errors::CoreError;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, CurrentUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub body: String,
}

async fn ensure_recipe(state: &AppState, recipe_id: &str) -> ApiResult<()> {
    if state.service.recipe_exists(recipe_id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found("recipe", recipe_id).into())
    }
}

/// `GET /recipes/{id}/comments`: oldest first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(_viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
) -> ApiResult<Json<Vec<Comment>>> {
    ensure_recipe(&state, &recipe_id).await?;
    Ok(Json(state.service.list_comments(&recipe_id).await?))
}

/// `POST /recipes/{id}/comments`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
    ApiJson(comment): ApiJson<NewComment>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let body = comment.body.trim();
    if body.is_empty() {
        return Err(CoreError::Validation("comment body must not be empty".into()).into());
    }
    ensure_recipe(&state, &recipe_id).await?;

    let created = state
        .service
        .create_comment(&viewer.id, &recipe_id, body)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
