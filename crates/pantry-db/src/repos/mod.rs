//! Repository modules implementing CRUD operations for all Pantry entities.
//!
//! Each module adds methods to `PantryService` via `impl PantryService` blocks.

pub mod comment;
pub mod follow;
pub mod like;
pub mod recipe;
pub mod user;
