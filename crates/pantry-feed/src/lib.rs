//! # pantry-feed
//!
//! Domain operations that sit between the HTTP surface and storage:
//!
//! - [`composer`]: the personalized feed of recipes by followed users
//! - [`likes`]: the like/unlike state machine driven by atomic storage results
//! - [`timely`]: the time-of-day Yummly feed
//!
//! Everything here is generic over the accessor traits in
//! `pantry_core::store`, so the same code runs against libSQL and against the
//! in-memory stores used in tests.

pub mod composer;
pub mod likes;
pub mod timely;

#[cfg(test)]
pub(crate) mod test_support;

pub use composer::compose_feed;
pub use likes::{like, like_state, like_status, unlike};
pub use timely::{TaggedFeed, feed_for_time};
