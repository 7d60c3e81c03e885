pub mod forecast;
pub mod performance;
pub mod weather;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::settings;

/// Fetches and deserializes one static JSON artifact.
///
/// The artifacts are plain files published by the forecast pipeline, so
/// there is no response envelope to unwrap; a non-OK status or a parse
/// failure surfaces as the error string the fetch state machinery shows.
pub async fn get<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = settings::get_settings().artifact_url(path);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", path, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", path, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", path);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", path, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", path);
    Ok(payload)
}
