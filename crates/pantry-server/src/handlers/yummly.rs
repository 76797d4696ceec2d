//! Yummly proxy endpoints.
//!
//! Upstream failures keep the upstream status, except autocomplete which
//! always reports 500. Successful bodies are relayed unchanged.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue};
use pantry_yummly::UPSTREAM_FAILURE;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub start: Option<u32>,
    pub max_results: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub start: Option<u32>,
    pub limit: Option<u32>,
}

/// `GET /yummly/autocomplete?query=`
pub async fn autocomplete(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AutocompleteQuery>,
) -> ApiResult<Json<Value>> {
    match state.yummly.autocomplete(&query.query).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            tracing::warn!(error = %e, "yummly autocomplete failed");
            Err(ApiError::Internal(UPSTREAM_FAILURE.into()))
        }
    }
}

/// `GET /yummly/search?query=&start=&maxResults=`
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Json<Value>> {
    let value = state
        .yummly
        .search(
            &query.query,
            query.start.unwrap_or(0),
            query.max_results.unwrap_or(state.feed.search_max_results),
        )
        .await?;
    Ok(Json(value))
}

/// `GET /yummly/categories`
pub async fn categories(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.yummly.categories_list().await?))
}

/// `GET /yummly/similarities`: query string forwarded as-is.
pub async fn similarities(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.yummly.list_similarities(&params).await?))
}

/// Response header naming the meal tag `/yummly/feeds/now` selected.
pub const MEAL_TAG_HEADER: &str = "x-pantry-meal-tag";

/// `GET /yummly/feeds/now?start=&limit=`: `feeds/list` body for the current
/// local hour, with the selected tag in [`MEAL_TAG_HEADER`].
pub async fn feeds_now(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<([(HeaderName, HeaderValue); 1], Json<Value>)> {
    let timely = pantry_feed::feed_for_time(
        state.yummly.as_ref(),
        &chrono::Local::now(),
        page.start.unwrap_or(state.feed.timely_start),
        page.limit.unwrap_or(state.feed.timely_limit),
    )
    .await?;
    let tag = HeaderValue::from_static(timely.tag.as_str());
    Ok(([(HeaderName::from_static(MEAL_TAG_HEADER), tag)], Json(timely.feed)))
}
