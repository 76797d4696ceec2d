//! Entity structs for all Pantry domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod comment;
mod follow;
mod like;
mod recipe;
mod user;

pub use comment::Comment;
pub use follow::Follow;
pub use like::Like;
pub use recipe::{NewRecipe, Recipe};
pub use user::{Registration, User};
