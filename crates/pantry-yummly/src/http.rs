//! Shared HTTP response handling for Yummly calls.

use crate::error::{UPSTREAM_FAILURE, YummlyError};

/// Accept only `200 OK`; anything else becomes [`YummlyError::Api`] carrying
/// the status and the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, YummlyError> {
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            UPSTREAM_FAILURE.to_string()
        } else {
            body
        };
        tracing::warn!(status = status.as_u16(), "yummly request failed");
        return Err(YummlyError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Decode a successful response body as JSON, unchanged.
pub async fn read_json(resp: reqwest::Response) -> Result<serde_json::Value, YummlyError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| YummlyError::Parse(e.to_string()))
}
