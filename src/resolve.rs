use serde::de::DeserializeOwned;

use crate::{DecodeError, Error, Resolved, Response};

/// Resolves a transport outcome, decoding success bodies as JSON into `T`.
///
/// Non-success bodies are never decoded; they are preserved raw inside
/// [`Error::BadStatus`]. A success-status body that fails to decode comes
/// back as [`Error::BadJson`] with the body byte-identical to what was
/// received, so the caller can inspect it.
pub fn resolve_json<T: DeserializeOwned>(
    response: Response<String>,
) -> Result<Resolved<T>, Error<String>> {
    match response {
        Response::BadUrl(url) => Err(Error::BadUrl(url)),
        Response::Timeout => Err(Error::Timeout),
        Response::NetworkError => Err(Error::NetworkError),
        Response::BadStatus(meta, body) => Err(Error::BadStatus { meta, body }),
        Response::GoodStatus(meta, body) => match from_json(&body) {
            Ok(data) => Ok(Resolved { meta, data }),
            Err(source) => Err(Error::BadJson { meta, body, source }),
        },
    }
}

/// Resolves a transport outcome without touching the body.
///
/// Same classification as [`resolve_json`], generic over the body
/// representation. For plain text, raw bytes, or when decoding is
/// deferred to the caller.
pub fn resolve_raw<B>(response: Response<B>) -> Result<Resolved<B>, Error<B>> {
    match response {
        Response::BadUrl(url) => Err(Error::BadUrl(url)),
        Response::Timeout => Err(Error::Timeout),
        Response::NetworkError => Err(Error::NetworkError),
        Response::BadStatus(meta, body) => Err(Error::BadStatus { meta, body }),
        Response::GoodStatus(meta, body) => Ok(Resolved { meta, data: body }),
    }
}

/// Deserializes JSON, reporting the path to the failing field on error.
///
/// Exposed so callers can run the same decode against a body they pulled
/// out of [`Error::BadStatus`].
pub fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| DecodeError {
        path: err.path().to_string(),
        message: err.inner().to_string(),
    })
}
