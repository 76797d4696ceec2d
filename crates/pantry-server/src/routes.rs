use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, comments, feed, likes, recipes, users, yummly};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Users and the follow graph
        .route("/users", post(users::register))
        .route("/users/me/following", get(users::following))
        .route("/users/{id}/follow", post(users::follow))
        // Recipes
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::get)
                .put(recipes::update)
                .patch(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/recipes/{id}/like",
            get(likes::status).post(likes::like).delete(likes::unlike),
        )
        .route(
            "/recipes/{id}/comments",
            get(comments::list).post(comments::create),
        )
        .route("/me/recipes", get(recipes::mine))
        .route("/feed", get(feed::feed))
        // Yummly proxy
        .route("/yummly/autocomplete", get(yummly::autocomplete))
        .route("/yummly/search", get(yummly::search))
        .route("/yummly/categories", get(yummly::categories))
        .route("/yummly/similarities", get(yummly::similarities))
        .route("/yummly/feeds/now", get(yummly::feeds_now))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
