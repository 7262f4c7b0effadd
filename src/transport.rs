//! Glue between `reqwest` and the resolvers.
//!
//! Transport behavior (timeouts, redirects, TLS, proxies) stays configured
//! on the `reqwest` client and builder; this module only classifies a
//! finished exchange into a [`Response`] and hands it to a resolver.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{resolve_json, resolve_raw, Metadata, Resolved, Response, Result};

#[cfg(feature = "tracing")]
use crate::Error;

/// Classifies a `reqwest` error into the matching no-response outcome.
///
/// Timeouts map to [`Response::Timeout`]; unbuildable requests (typically
/// a malformed URL) to [`Response::BadUrl`], carrying the offending URL
/// when `reqwest` exposes it and the builder error text otherwise;
/// everything else to [`Response::NetworkError`].
pub fn classify_error<B>(err: &reqwest::Error) -> Response<B> {
    if err.is_timeout() {
        Response::Timeout
    } else if err.is_builder() {
        let url = err
            .url()
            .map_or_else(|| err.to_string(), ToString::to_string);
        Response::BadUrl(url)
    } else {
        Response::NetworkError
    }
}

fn read_metadata(response: &reqwest::Response) -> Metadata {
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    Metadata {
        status: response.status().as_u16(),
        // reqwest does not surface the wire reason phrase (HTTP/2 has
        // none); use the canonical text for the code.
        status_text: response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_owned(),
        headers,
    }
}

/// Reads a completed `reqwest` outcome into a text-bodied [`Response`].
///
/// A failure while reading the body re-enters [`classify_error`].
pub async fn text_response(outcome: reqwest::Result<reqwest::Response>) -> Response<String> {
    match outcome {
        Ok(response) => {
            let meta = read_metadata(&response);
            match response.text().await {
                Ok(body) => Response::from_status(meta, body),
                Err(err) => classify_error(&err),
            }
        }
        Err(err) => classify_error(&err),
    }
}

/// Reads a completed `reqwest` outcome into a byte-bodied [`Response`].
pub async fn bytes_response(outcome: reqwest::Result<reqwest::Response>) -> Response<Vec<u8>> {
    match outcome {
        Ok(response) => {
            let meta = read_metadata(&response);
            match response.bytes().await {
                Ok(body) => Response::from_status(meta, body.to_vec()),
                Err(err) => classify_error(&err),
            }
        }
        Err(err) => classify_error(&err),
    }
}

/// Sends a request and resolves the JSON body into `T`.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<Resolved<T>> {
    let resolved = resolve_json(text_response(request.send().await).await);

    #[cfg(feature = "tracing")]
    if let Err(Error::BadJson { meta, source, .. }) = &resolved {
        tracing::debug!(
            "response body failed to decode (status {}): {}",
            meta.status,
            source
        );
    }

    resolved
}

/// Sends a request and passes the text body through unresolved.
pub async fn send_text(request: RequestBuilder) -> Result<Resolved<String>> {
    resolve_raw(text_response(request.send().await).await)
}

/// Sends a request and passes the raw bytes through unresolved.
pub async fn send_bytes(request: RequestBuilder) -> Result<Resolved<Vec<u8>>, Vec<u8>> {
    resolve_raw(bytes_response(request.send().await).await)
}
