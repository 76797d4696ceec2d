use axum::Json;
use axum::extract::State;
use pantry_core::entities::Recipe;

use crate::error::ApiResult;
use crate::extract::CurrentUser;
use crate::state::AppState;

/// `GET /feed`: recipes by the users the caller follows, newest first.
pub async fn feed(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> ApiResult<Json<Vec<Recipe>>> {
    let recipes = pantry_feed::compose_feed(state.service.as_ref(), &viewer.id).await?;
    Ok(Json(recipes))
}
