//! Time-of-day feed: pick a meal tag for the current hour and fetch the
//! matching Yummly feed.

use std::future::Future;

use chrono::Timelike;
use pantry_core::meal::select_tag;
use pantry_core::responses::TimelyFeed;
use pantry_yummly::{YummlyClient, YummlyError};
use serde_json::Value;

/// Source of tag-filtered feeds.
pub trait TaggedFeed {
    fn feeds_list(
        &self,
        start: u32,
        limit: u32,
        tag: &str,
    ) -> impl Future<Output = Result<Value, YummlyError>> + Send;
}

impl TaggedFeed for YummlyClient {
    async fn feeds_list(&self, start: u32, limit: u32, tag: &str) -> Result<Value, YummlyError> {
        Self::feeds_list(self, start, limit, tag).await
    }
}

/// Fetch the feed for the meal that fits `now`.
///
/// The upstream payload is returned untouched next to the selected tag.
///
/// # Errors
///
/// Propagates the [`YummlyError`] from the feed source.
pub async fn feed_for_time<F, T>(
    source: &F,
    now: &T,
    start: u32,
    limit: u32,
) -> Result<TimelyFeed, YummlyError>
where
    F: TaggedFeed + Sync,
    T: Timelike + Sync,
{
    let tag = select_tag(now);
    tracing::debug!(tag = tag.as_str(), start, limit, "time-based feed");
    let feed = source.feeds_list(start, limit, tag.feed_tag()).await?;
    Ok(TimelyFeed { tag, feed })
}
