//! State machines for Pantry relations.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// LikeState
// ---------------------------------------------------------------------------

/// Like state of one (user, recipe) pair.
///
/// ```text
/// not_liked --like--> liked
/// liked --unlike--> not_liked
/// ```
///
/// `like` on `liked` and `unlike` on `not_liked` are rejected. There is no
/// terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    #[default]
    NotLiked,
    Liked,
}

/// Action a user takes on a like pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeState {
    /// State implied by whether a like row exists.
    #[must_use]
    pub const fn from_exists(exists: bool) -> Self {
        if exists { Self::Liked } else { Self::NotLiked }
    }

    /// Apply `action` to the pair (`user_id`, `recipe_id`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AlreadyLiked`] for `like` on `liked`, and
    /// [`CoreError::NotLiked`] for `unlike` on `not_liked`.
    pub fn apply(
        self,
        action: LikeAction,
        user_id: &str,
        recipe_id: &str,
    ) -> Result<Self, CoreError> {
        match (self, action) {
            (Self::NotLiked, LikeAction::Like) => Ok(Self::Liked),
            (Self::Liked, LikeAction::Unlike) => Ok(Self::NotLiked),
            (Self::Liked, LikeAction::Like) => Err(CoreError::AlreadyLiked {
                user_id: user_id.to_string(),
                recipe_id: recipe_id.to_string(),
            }),
            (Self::NotLiked, LikeAction::Unlike) => Err(CoreError::NotLiked {
                user_id: user_id.to_string(),
                recipe_id: recipe_id.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotLiked => "not_liked",
            Self::Liked => "liked",
        }
    }
}

impl fmt::Display for LikeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_not_liked() {
        assert_eq!(LikeState::default(), LikeState::NotLiked);
    }

    #[test]
    fn like_then_unlike_returns_to_not_liked() {
        let liked = LikeState::NotLiked
            .apply(LikeAction::Like, "usr-1", "rcp-1")
            .unwrap();
        assert_eq!(liked, LikeState::Liked);
        let back = liked.apply(LikeAction::Unlike, "usr-1", "rcp-1").unwrap();
        assert_eq!(back, LikeState::NotLiked);
    }

    #[test]
    fn double_like_is_rejected() {
        let err = LikeState::Liked
            .apply(LikeAction::Like, "usr-1", "rcp-1")
            .unwrap_err();
        assert!(matches!(err, CoreError::AlreadyLiked { .. }));
    }

    #[test]
    fn unlike_without_like_is_rejected() {
        let err = LikeState::NotLiked
            .apply(LikeAction::Unlike, "usr-1", "rcp-1")
            .unwrap_err();
        assert!(matches!(err, CoreError::NotLiked { .. }));
    }


    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&LikeState::NotLiked).unwrap(),
            "\"not_liked\""
        );
        assert_eq!(LikeState::from_exists(true), LikeState::Liked);
    }
}
