//! Single-shot fetch pipelines.
//!
//! Two layers: [`fetch_bytes`] pulls raw bytes from a URL through any
//! [`HttpClient`], and [`fetch_json`] runs the bytes through [`Json::decode`],
//! surfacing decode failures on the same error channel as transport
//! failures. Each call delivers exactly one completion; cancellation is
//! dropping the future.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::json::{DecodeError, Json};
use crate::traits::{Headers, HttpClient, HttpError};

/// A fetch failed. The two arms mirror the only distinction consumers make:
/// the network broke, or the payload was not JSON.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] HttpError),
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

/// GET a URL and return the response body. A non-2xx status is reported as
/// a transport error carrying the body text.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<Bytes, FetchError> {
    let response = client.get(url, &Headers::new()).await?;
    if !response.is_success() {
        let message = response.text().unwrap_or_default();
        debug!(url, status = response.status, "fetch returned error status");
        return Err(FetchError::Transport(HttpError::ServerError {
            status: response.status,
            message,
        }));
    }
    Ok(response.body)
}

/// GET a URL and decode the body into a [`Json`] value.
pub async fn fetch_json<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<Json, FetchError> {
    let bytes = fetch_bytes(client, url).await?;
    let value = Json::decode(&bytes)?;
    debug!(url, "fetched and decoded");
    Ok(value)
}
