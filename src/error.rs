use std::fmt;

use crate::Metadata;

/// Error type returned by the resolvers.
///
/// Every variant that implies a response was actually received
/// ([`Error::BadStatus`], [`Error::BadJson`]) carries the response
/// [`Metadata`] and the raw, undecoded body — never just a message string.
/// All variants are terminal as far as this crate is concerned; retry
/// policy belongs to the caller.
///
/// The `Display` rendering is a stable single-line summary for logs and
/// tests, available whenever the body representation `B` is printable. No
/// truncation or escaping is applied to the body.
#[derive(Debug)]
pub enum Error<B = String> {
    /// The request URL was malformed; no network attempt was made.
    BadUrl(String),
    /// No response within the configured deadline.
    Timeout,
    /// Transport failure (DNS, connection refused, ...) before a response
    /// arrived.
    NetworkError,
    /// Non-success status code; the body is preserved raw, never decoded.
    BadStatus {
        /// Metadata of the received response.
        meta: Metadata,
        /// Raw response body.
        body: B,
    },
    /// Success status code, but the body failed to decode into the
    /// expected type. The raw body is kept alongside the decode detail so
    /// the caller can inspect what was actually received.
    BadJson {
        /// Metadata of the received response.
        meta: Metadata,
        /// Raw response body, byte-identical to what was received.
        body: B,
        /// Structured decode failure detail.
        source: DecodeError,
    },
}

// `Display` is available only when the body representation `B` is itself
// printable, so `Error<B>` remains constructible for any `B` (e.g. raw
// bytes via `resolve_raw`). thiserror's derive can only emit an
// unconditional impl, so the equivalent rendering is written by hand here.
impl<B: fmt::Display> fmt::Display for Error<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadUrl(url) => write!(f, "BadUrl {url}"),
            Self::Timeout => write!(f, "Timeout"),
            Self::NetworkError => write!(f, "NetworkError"),
            Self::BadStatus { meta, body } => {
                write!(f, "BadStatus {} {}: {}", meta.status, meta.status_text, body)
            }
            Self::BadJson { meta, body, source } => write!(
                f,
                "BadJson {} {}: {} {}",
                meta.status, meta.status_text, body, source
            ),
        }
    }
}

impl<B: fmt::Display + fmt::Debug> std::error::Error for Error<B> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadJson { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl<B> Error<B> {
    /// Metadata of the received response, when one was received.
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::BadStatus { meta, .. } | Self::BadJson { meta, .. } => Some(meta),
            Self::BadUrl(_) | Self::Timeout | Self::NetworkError => None,
        }
    }

    /// Status code of the received response, when one was received.
    pub fn status(&self) -> Option<u16> {
        self.metadata().map(|meta| meta.status)
    }

    /// Raw body of the received response, when one was received.
    pub fn body(&self) -> Option<&B> {
        match self {
            Self::BadStatus { body, .. } | Self::BadJson { body, .. } => Some(body),
            Self::BadUrl(_) | Self::Timeout | Self::NetworkError => None,
        }
    }

    /// Decode failure detail, for [`Error::BadJson`].
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::BadJson { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns `true` for [`Error::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Why a JSON body failed to decode: the path to the offending field plus
/// the underlying deserializer message.
///
/// Kept structured so callers can render it their own way; only the
/// `Display` impl turns it into text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("at {path}: {message}")]
pub struct DecodeError {
    /// Path to the failing field (e.g. `"user.address.city"`), `"."` at
    /// the top level.
    pub path: String,
    /// Underlying deserializer message.
    pub message: String,
}
