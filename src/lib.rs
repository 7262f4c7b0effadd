//! `detailed-http` resolves finished `reqwest` exchanges without throwing
//! diagnostics away: every failure that received a response keeps its
//! status, status text, headers, and raw body.
//!
//! Entry points:
//! - [`resolve_json`] / [`resolve_raw`] — pure resolvers over an already
//!   classified [`Response`]
//! - [`transport::send_json`], [`transport::send_text`],
//!   [`transport::send_bytes`] — send a `reqwest::RequestBuilder` and
//!   resolve the outcome in one call
//! - [`cookie`] — `Set-Cookie` construction and `Cookie` extraction

mod error;
mod resolve;
mod response;

pub mod cookie;
pub mod transport;

pub use error::{DecodeError, Error};
pub use resolve::{from_json, resolve_json, resolve_raw};
pub use response::{Metadata, Resolved, Response};

pub type Result<T, B = String> = std::result::Result<T, Error<B>>;
