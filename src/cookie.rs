//! Cookie header construction and extraction.
//!
//! Stateless string transforms, independent of the resolver stack: render
//! a `Set-Cookie` response header value from a [`Cookie`], or pull one
//! named value out of a request `Cookie` header.

use std::fmt;

/// Single `Set-Cookie` attribute.
///
/// Values are passed through as opaque text; RFC 6265 character
/// restrictions are the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CookieAttribute {
    /// `SameSite=<value>` (`"Strict"`, `"Lax"`, or `"None"`).
    SameSite(String),
    /// `Path=<value>`.
    Path(String),
    /// `Domain=<value>`.
    Domain(String),
    /// Lifetime in seconds, rendered as `Max-Age=<n>`.
    MaxAge(i64),
    /// `Expires=<date>`; the date string is not validated.
    Expires(String),
    /// Bare `Secure` flag.
    Secure,
    /// Bare `HttpOnly` flag.
    HttpOnly,
}

impl fmt::Display for CookieAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameSite(value) => write!(f, "SameSite={value}"),
            Self::Path(value) => write!(f, "Path={value}"),
            Self::Domain(value) => write!(f, "Domain={value}"),
            Self::MaxAge(seconds) => write!(f, "Max-Age={seconds}"),
            Self::Expires(date) => write!(f, "Expires={date}"),
            Self::Secure => f.write_str("Secure"),
            Self::HttpOnly => f.write_str("HttpOnly"),
        }
    }
}

/// A cookie plus its attributes, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    pub name: String,
    /// Raw cookie value, not URL-encoded.
    pub value: String,
    /// Attributes, rendered in exactly this order.
    pub attributes: Vec<CookieAttribute>,
}

impl Cookie {
    /// Creates a cookie carrying the given attributes.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        attributes: impl Into<Vec<CookieAttribute>>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attributes: attributes.into(),
        }
    }

    /// Renders the `Set-Cookie` response header value.
    ///
    /// `name=value` first, then each attribute in sequence, joined with
    /// `"; "`. No escaping or quoting is applied.
    pub fn response_string(&self) -> String {
        let mut parts = Vec::with_capacity(self.attributes.len() + 1);
        parts.push(format!("{}={}", self.name, self.value));
        parts.extend(self.attributes.iter().map(ToString::to_string));
        parts.join("; ")
    }
}

/// Extracts the named cookie's value from a request `Cookie` header.
///
/// Segments are split on the literal `"; "` and only the first segment
/// starting with `name=` is considered, so later duplicates of the same
/// name are ignored. The prefix is stripped with a substring replace,
/// which also removes any further `name=` occurrences inside the matched
/// value.
pub fn get(name: &str, header: &str) -> Option<String> {
    let prefix = format!("{name}=");
    header
        .split("; ")
        .find(|segment| segment.starts_with(prefix.as_str()))
        .map(|segment| segment.replace(prefix.as_str(), ""))
}
