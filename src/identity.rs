use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub const FORWARDED_FOR: &str = "x-forwarded-for";
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Who is asking, for rate-limiting purposes only.
///
/// Taken from the first hop of `x-forwarded-for`, so any caller that controls
/// its own headers can pick its identity. It is a throttling key, not a
/// credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an identity from a raw forwarded-for header value.
    ///
    /// An empty first hop (`" , 1.1.1.1"`) is not passed through; it yields
    /// [`UNKNOWN_CLIENT`] just like a missing header.
    pub fn from_forwarded_for(header: Option<&str>) -> Self {
        let first = header
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty());

        match first {
            Some(ip) => Self::new(ip),
            None => Self::new(UNKNOWN_CLIENT),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S> FromRequestParts<S> for ClientIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok());

        Ok(Self::from_forwarded_for(header))
    }
}
