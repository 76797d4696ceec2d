//! # pantry-yummly
//!
//! HTTP client for the Yummly recipe API served through RapidAPI.
//!
//! Every call issues exactly one GET against the configured base URL with the
//! `X-RapidAPI-Key` / `X-RapidAPI-Host` credential headers. A `200` body is
//! returned unchanged as JSON; any other status becomes
//! [`YummlyError::Api`]. There is no retry and no caching.

mod error;
mod http;

pub use error::{UPSTREAM_FAILURE, YummlyError};

use std::time::Duration;

use pantry_config::YummlyConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde_json::Value;

use crate::http::{check_response, read_json};

const HEADER_API_KEY: &str = "x-rapidapi-key";
const HEADER_API_HOST: &str = "x-rapidapi-host";

/// Default `maxResult` for [`YummlyClient::search`].
pub const DEFAULT_MAX_RESULTS: u32 = 3;

/// HTTP client for the Yummly endpoints.
#[derive(Debug, Clone)]
pub struct YummlyClient {
    http: reqwest::Client,
    base_url: String,
}

impl YummlyClient {
    /// Build a client from the Yummly configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`YummlyError::InvalidUrl`] if the base URL does not parse,
    /// [`YummlyError::Config`] if a credential is not a valid header value,
    /// or [`YummlyError::Http`] if the underlying client fails to build.
    pub fn new(config: &YummlyConfig) -> Result<Self, YummlyError> {
        Url::parse(&config.base_url)
            .map_err(|e| YummlyError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(HEADER_API_KEY),
            header_value(&config.api_key, "api_key")?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_API_HOST),
            header_value(&config.api_host, "api_host")?,
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("pantry/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve `endpoint` against the base URL with the given query parameters.
    fn endpoint_url<I, K, V>(&self, endpoint: &str, params: I) -> Result<Url, YummlyError>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let raw = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| YummlyError::InvalidUrl(format!("{raw}: {e}")))?;
        // An empty pair list would still leave a trailing `?`.
        let mut pairs = params.into_iter().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// GET `endpoint` with `params` and return the JSON body unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`YummlyError::Api`] for any non-200 status,
    /// [`YummlyError::Http`] on transport failure or timeout, and
    /// [`YummlyError::Parse`] if a 200 body is not JSON.
    pub async fn fetch<I, K, V>(&self, endpoint: &str, params: I) -> Result<Value, YummlyError>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.endpoint_url(endpoint, params)?;
        tracing::debug!(endpoint, "yummly request");
        let resp = check_response(self.http.get(url).send().await?).await?;
        read_json(resp).await
    }

    /// Query suggestions for a partial search string.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn autocomplete(&self, query: &str) -> Result<Value, YummlyError> {
        self.fetch("feeds/auto-complete", [("q", query)]).await
    }

    /// Full-text recipe search.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn search(
        &self,
        query: &str,
        start: u32,
        max_results: u32,
    ) -> Result<Value, YummlyError> {
        let start = start.to_string();
        let max_results = max_results.to_string();
        self.fetch(
            "feeds/search",
            [
                ("q", query),
                ("start", start.as_str()),
                ("maxResult", max_results.as_str()),
            ],
        )
        .await
    }

    /// Curated feed filtered by a Yummly tag expression.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn feeds_list(&self, start: u32, limit: u32, tag: &str) -> Result<Value, YummlyError> {
        let start = start.to_string();
        let limit = limit.to_string();
        self.fetch(
            "feeds/list",
            [
                ("start", start.as_str()),
                ("limit", limit.as_str()),
                ("tag", tag),
            ],
        )
        .await
    }

    /// Category taxonomy.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn categories_list(&self) -> Result<Value, YummlyError> {
        self.fetch("categories/list", std::iter::empty::<(&str, &str)>())
            .await
    }

    /// Recipes similar to the ones named by `params`, forwarded verbatim.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn list_similarities(&self, params: &[(String, String)]) -> Result<Value, YummlyError> {
        self.fetch("feeds/list-similarities", params).await
    }
}

fn header_value(value: &str, field: &str) -> Result<HeaderValue, YummlyError> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| YummlyError::Config(format!("yummly.{field}: {e}")))?;
    header.set_sensitive(field == "api_key");
    Ok(header)
}
