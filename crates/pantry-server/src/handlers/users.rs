//! Registration and the follow graph.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use pantry_core::entities::{Follow, Registration, User};
use pantry_core::errors::CoreError;
use pantry_db::error::DatabaseError;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath, CurrentUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
}

/// `POST /users`: register and receive a bearer token.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Registration>)> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(CoreError::Validation("username must not be empty".into()).into());
    }

    let registration = state
        .service
        .create_user(username)
        .await?
        .ok_or_else(|| ApiError::BadRequest(format!("username '{username}' is taken")))?;

    tracing::info!(user_id = %registration.user.id, "user registered");
    Ok((StatusCode::CREATED, Json(registration)))
}

/// `POST /users/{id}/follow`: the caller starts following `id`.
pub async fn follow(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
    ApiPath(followee_id): ApiPath<String>,
) -> ApiResult<(StatusCode, Json<Follow>)> {
    if followee_id == viewer.id {
        return Err(CoreError::Validation("cannot follow yourself".into()).into());
    }
    let followee = match state.service.get_user(&followee_id).await {
        Ok(user) => user,
        Err(DatabaseError::NoResult) => {
            return Err(CoreError::not_found("user", &followee_id).into());
        }
        Err(e) => return Err(e.into()),
    };

    let edge = state
        .service
        .follow(&viewer.id, &followee.id)
        .await?
        .ok_or_else(|| CoreError::AlreadyFollowing {
            follower_id: viewer.id.clone(),
            followee_id: followee.id.clone(),
        })?;
    tracing::info!(follower = %viewer.id, followee = %followee.username, "follow created");
    Ok((StatusCode::CREATED, Json(edge)))
}

/// `GET /users/me/following`
pub async fn following(
    State(state): State<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.service.list_followees(&viewer.id).await?))
}
