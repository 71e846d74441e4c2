//! Backend base URL resolution.
//!
//! The base URL comes from the plugin configuration, then the
//! `ZENTIMENT_API_BASE` environment variable, then [`DEFAULT_API_BASE`]. The
//! first source holding a valid absolute `http`/`https` URL wins.

use crate::domain::{Result, ZentimentError};
use url::Url;

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Environment variable consulted when the plugin config has no `api_base`.
pub const API_BASE_ENV: &str = "ZENTIMENT_API_BASE";

const PREDICT_PATH: &str = "/predict";

/// A validated backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    /// Validates a base URL.
    ///
    /// Trailing slashes are dropped so that `{base}/predict` never contains a
    /// double slash.
    ///
    /// # Errors
    ///
    /// Returns [`ZentimentError::Config`] if the value is not an absolute
    /// `http` or `https` URL, or if it carries a query or fragment, which
    /// `/predict` could not be appended after.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ZentimentError::Config(format!("invalid api_base {raw:?}: {e}")))?;

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ZentimentError::Config(format!(
                "api_base {raw:?} must not contain a query or fragment"
            )));
        }

        match parsed.scheme() {
            "http" | "https" if parsed.has_host() => Ok(Self { base: trimmed.to_string() }),
            scheme => Err(ZentimentError::Config(format!(
                "api_base {raw:?} must be an http(s) URL with a host, got scheme {scheme:?}"
            ))),
        }
    }

    /// Picks the first valid base URL among the candidates, in order.
    ///
    /// Invalid candidates are logged and skipped.
    #[must_use]
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        candidates
            .into_iter()
            .flatten()
            .find_map(|raw| match Self::parse(raw) {
                Ok(endpoint) => Some(endpoint),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring api_base candidate");
                    None
                }
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The full `/predict` URL.
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self { base: DEFAULT_API_BASE.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(Endpoint::default().predict_url(), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let endpoint = Endpoint::parse("https://api.example.com/v1//").unwrap();
        assert_eq!(endpoint.predict_url(), "https://api.example.com/v1/predict");
    }

    #[test]
    fn rejects_non_http_and_relative_values() {
        assert!(Endpoint::parse("ftp://example.com").is_err());
        assert!(Endpoint::parse("localhost:5000/api").is_err());
        assert!(Endpoint::parse("not a url").is_err());
    }

    #[test]
    fn rejects_query_and_fragment() {
        assert!(Endpoint::parse("http://h/?k=v").is_err());
        assert!(Endpoint::parse("http://h/api#top").is_err());
        assert!(Endpoint::parse("http://h/api?").is_err());

        let endpoint = Endpoint::resolve([Some("http://h/?k=v"), Some("http://h/api")]);
        assert_eq!(endpoint.predict_url(), "http://h/api/predict");
    }

    #[test]
    fn resolve_skips_missing_and_invalid_candidates() {
        let endpoint = Endpoint::resolve([None, Some("::bad::"), Some("http://10.0.0.2:8080")]);
        assert_eq!(endpoint.base(), "http://10.0.0.2:8080");

        let fallback = Endpoint::resolve([None, Some("bogus")]);
        assert_eq!(fallback, Endpoint::default());
    }
}
