//! Like state of the caller on a recipe.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use pantry_core::responses::LikeStatus;

use crate::error::ApiResult;
use crate::extract::{ApiPath, CurrentUser};
use crate::state::AppState;

/// `GET /recipes/{id}/like`
pub async fn status(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
) -> ApiResult<Json<LikeStatus>> {
    let status = pantry_feed::like_status(state.service.as_ref(), &viewer.id, &recipe_id).await?;
    Ok(Json(status))
}

/// `POST /recipes/{id}/like`
pub async fn like(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
) -> ApiResult<(StatusCode, Json<LikeStatus>)> {
    let status = pantry_feed::like(state.service.as_ref(), &viewer.id, &recipe_id).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// `DELETE /recipes/{id}/like`
pub async fn unlike(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(recipe_id): ApiPath<String>,
) -> ApiResult<Json<LikeStatus>> {
    let status = pantry_feed::unlike(state.service.as_ref(), &viewer.id, &recipe_id).await?;
    Ok(Json(status))
}
