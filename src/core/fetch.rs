use crate::utils::error::{AtlasError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;

/// Fetches the raw country entries from the upstream API.
///
/// Every failure mode collapses into `DataUnavailable`: transport errors,
/// non-2xx statuses, a non-JSON content type, an undecodable body, or a
/// body that is not a JSON array. Retry and timeout policy stays with the
/// caller's `Client`.
pub async fn fetch_countries(client: &Client, endpoint: &str) -> Result<Vec<Value>> {
    tracing::debug!("Requesting country data from: {}", endpoint);

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| AtlasError::DataUnavailable {
            reason: format!("request failed: {e}"),
        })?;

    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        return Err(AtlasError::DataUnavailable {
            reason: format!("unexpected status {status}"),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !content_type.contains("application/json") {
        return Err(AtlasError::DataUnavailable {
            reason: format!("expected JSON, got content type {content_type:?}"),
        });
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| AtlasError::DataUnavailable {
            reason: format!("undecodable body: {e}"),
        })?;

    match body {
        Value::Array(entries) => Ok(entries),
        _ => Err(AtlasError::DataUnavailable {
            reason: "expected an array of country entries".to_string(),
        }),
    }
}
