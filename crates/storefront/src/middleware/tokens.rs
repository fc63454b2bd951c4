//! Session token cookies.
//!
//! The login flow leaves two opaque tokens in browser cookies. The storefront
//! only checks that both are present before mutating anything and forwards
//! them to the backend; their contents are never inspected here.

use std::collections::HashMap;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use secrecy::{ExposeSecret, SecretString};

/// Cookie holding the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Cookie holding the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Parse a `Cookie` header value into name/value pairs.
///
/// Pairs are separated by `"; "` and split on `=`. The value is the text
/// between the first and second `=`, so `name==x` has an empty value. Values
/// are percent-decoded; a value that does not decode to UTF-8 is kept raw.
/// Pairs without `=` are skipped, and a repeated name keeps its last value.
#[must_use]
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    header
        .split("; ")
        .filter_map(|pair| {
            let mut parts = pair.split('=');
            Some((parts.next()?, parts.next()?))
        })
        .map(|(name, value)| {
            let decoded = urlencoding::decode(value)
                .map_or_else(|_| value.to_string(), std::borrow::Cow::into_owned);
            (name.to_string(), decoded)
        })
        .collect()
}

/// Look up a cookie across every `Cookie` header of a request.
///
/// Empty values count as absent.
#[must_use]
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let joined = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");

    parse_cookies(&joined)
        .remove(name)
        .filter(|value| !value.is_empty())
}

/// Access and refresh tokens of the current browser session.
///
/// Implements `Debug` manually to redact the token values.
#[derive(Clone)]
pub struct SessionTokens {
    access: SecretString,
    refresh: SecretString,
}

impl SessionTokens {
    /// Read both tokens from request headers.
    ///
    /// Returns `None` when either cookie is missing or empty.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let access = cookie_value(headers, ACCESS_TOKEN_COOKIE)?;
        let refresh = cookie_value(headers, REFRESH_TOKEN_COOKIE)?;

        Some(Self {
            access: SecretString::from(access),
            refresh: SecretString::from(refresh),
        })
    }

    /// `Cookie` header value carrying both tokens, for forwarding upstream.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!(
            "{ACCESS_TOKEN_COOKIE}={}; {REFRESH_TOKEN_COOKIE}={}",
            urlencoding::encode(self.access.expose_secret()),
            urlencoding::encode(self.refresh.expose_secret())
        )
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

/// Extractor that optionally gets the session tokens.
///
/// Never rejects; handlers decide how to fail when tokens are missing.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalSessionTokens(tokens): OptionalSessionTokens) -> impl IntoResponse {
///     match tokens {
///         Some(_) => "signed in",
///         None => "session expired",
///     }
/// }
/// ```
pub struct OptionalSessionTokens(pub Option<SessionTokens>);

impl<S> FromRequestParts<S> for OptionalSessionTokens
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(SessionTokens::from_headers(&parts.headers)))
    }
}
