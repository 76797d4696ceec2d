//! # pantry-server
//!
//! HTTP surface for Pantry, built on axum.
//!
//! Handlers are thin: they authenticate, validate the request shape and call
//! into `pantry-db` repositories or the `pantry-feed` operations. Errors from
//! every layer are mapped to `{"error", "status"}` JSON bodies by
//! [`error::ApiError`].

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
