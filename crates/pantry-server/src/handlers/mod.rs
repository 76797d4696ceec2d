//! Axum handler functions, one module per resource.

pub mod comments;
pub mod feed;
pub mod likes;
pub mod recipes;
pub mod users;
pub mod yummly;

use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
