//! Time-of-day meal tag selection.
//!
//! Maps the hour component of a local timestamp onto the course the external
//! recipe feed should surface:
//!
//! ```text
//! [ 0, 12)  breakfast-and-brunch
//! [12, 15)  lunch
//! [15, 20)  dessert/cake
//! [20, 23)  main-dishes
//! [23, 24)  breakfast-and-brunch (wrap-around)
//! ```
//!
//! Selection is pure; fetching is left to the caller.

use chrono::Timelike;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Course category surfaced by the time-based feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MealTag {
    BreakfastAndBrunch,
    Lunch,
    #[serde(rename = "dessert/cake")]
    Dessert,
    MainDishes,
}

impl MealTag {
    /// Tag for an hour of the day on the 24-hour clock.
    ///
    /// Hours outside `0..23` (only 23 on a real clock) fall back to breakfast.
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        match hour {
            0..12 => Self::BreakfastAndBrunch,
            12..15 => Self::Lunch,
            15..20 => Self::Dessert,
            20..23 => Self::MainDishes,
            _ => Self::BreakfastAndBrunch,
        }
    }

    /// Short name used in logs and API responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreakfastAndBrunch => "breakfast-and-brunch",
            Self::Lunch => "lunch",
            Self::Dessert => "dessert/cake",
            Self::MainDishes => "main-dishes",
        }
    }

    /// Filter string understood by the Yummly `feeds/list` endpoint.
    #[must_use]
    pub const fn feed_tag(self) -> &'static str {
        match self {
            Self::BreakfastAndBrunch => {
                "list.recipe.search_based:fq:attribute_s_mv:course^course-Breakfast and Brunch"
            }
            Self::Lunch => "list.recipe.search_based:fq:attribute_s_mv:course^course-Lunch",
            Self::Dessert => r"list.recipe.search_based: fq:attribute_s_mv: (dish\ ^ dish\-cake)",
            Self::MainDishes => {
                "list.recipe.search_based:fq:attribute_s_mv:(course^course-Main Dishes)"
            }
        }
    }
}

impl fmt::Display for MealTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the meal tag for `now`, using only its hour.
#[must_use]
pub fn select_tag<T: Timelike>(now: &T) -> MealTag {
    MealTag::for_hour(now.hour())
}
