use std::collections::HashMap;

/// Status line and headers of a received response.
///
/// Travels with every body: on the success path inside [`Resolved`], and on
/// the failure path inside the error variants that imply a response was
/// received. Rate-limit headers and the like stay reachable after
/// resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// HTTP status code.
    pub status: u16,
    /// Canonical status text (e.g. `"Not Found"`); empty for unknown codes.
    pub status_text: String,
    /// Response headers.
    pub headers: HashMap<String, String>,
}

impl Metadata {
    /// Single header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// How an HTTP request attempt concluded, before resolution.
///
/// The first three variants mean no response was ever received. The last
/// two carry the received [`Metadata`] together with the raw body in
/// representation `B` (text, bytes, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response<B> {
    /// The request URL was malformed; nothing was sent.
    BadUrl(String),
    /// No response within the configured deadline.
    Timeout,
    /// Transport failure (DNS, connection refused, ...) before a response
    /// arrived.
    NetworkError,
    /// Response received with a non-success status code.
    BadStatus(Metadata, B),
    /// Response received with a success status code.
    GoodStatus(Metadata, B),
}

impl<B> Response<B> {
    /// Classifies a received response by its status code.
    pub fn from_status(meta: Metadata, body: B) -> Self {
        if meta.is_success() {
            Self::GoodStatus(meta, body)
        } else {
            Self::BadStatus(meta, body)
        }
    }
}

/// A resolved success value paired with the response metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Metadata of the response the value came from.
    pub meta: Metadata,
    /// The decoded or passed-through body.
    pub data: T,
}
