//! Configuration constants, client settings and validation functions.

use std::borrow::Borrow;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{FinnError, Result};

/// Base URL for the FINN `iad` API.
pub const API_URL: &str = "https://cache.api.finn.no/iad/";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum number of attempts for transient failures.
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
pub const RETRY_BASE_DELAY_MS: u64 = 500;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "FINN_API_URL";

/// Environment variable overriding the HTTP timeout.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "FINN_HTTP_TIMEOUT_SECS";

/// Ad type pattern: lowercase words joined by dashes (e.g. `realestate-homes`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AD_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*$").expect("valid regex"));

/// FINN code pattern: up to 12 digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FINN_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,12}$").expect("valid regex"));

/// Settings for the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `https://cache.api.finn.no/iad/`.
    pub api_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Number of attempts for transient failures (at least one is always made).
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            timeout_secs: HTTP_TIMEOUT_SECS,
            max_retries: MAX_RETRIES,
        }
    }
}

impl ClientConfig {
    /// Build a config from defaults, overridden by `FINN_API_URL` and
    /// `FINN_HTTP_TIMEOUT_SECS` when set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(api_url) = lookup(ENV_API_URL).filter(|s| !s.trim().is_empty()) {
            config.api_url = api_url;
        }

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => tracing::warn!(
                    value = %raw,
                    "Ignoring invalid {ENV_HTTP_TIMEOUT_SECS}"
                ),
            }
        }

        config
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the number of attempts.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Validate an ad type (search vertical).
///
/// # Examples
/// ```
/// use finn_client::config::validate_ad_type;
///
/// assert!(validate_ad_type("realestate-homes").is_ok());
/// assert!(validate_ad_type("../admin").is_err());
/// ```
pub fn validate_ad_type(ad_type: &str) -> Result<()> {
    if AD_TYPE_PATTERN.is_match(ad_type) {
        Ok(())
    } else {
        Err(FinnError::InvalidAdType(ad_type.to_string()))
    }
}

/// Validate a FINN code.
///
/// # Examples
/// ```
/// use finn_client::config::validate_finn_code;
///
/// assert!(validate_finn_code("123456789").is_ok());
/// assert!(validate_finn_code("12a").is_err());
/// ```
pub fn validate_finn_code(finn_code: &str) -> Result<()> {
    if FINN_CODE_PATTERN.is_match(finn_code) {
        Ok(())
    } else {
        Err(FinnError::InvalidFinnCode(finn_code.to_string()))
    }
}

/// Parse an absolute URL.
pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| FinnError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Join the API base with a relative path, tolerating a missing trailing slash.
fn api_endpoint(api_url: &str, path: &str) -> Result<Url> {
    let base = format!("{}/", api_url.trim_end_matches('/'));
    parse_url(&base)?
        .join(path)
        .map_err(|source| FinnError::InvalidUrl {
            url: format!("{base}{path}"),
            source,
        })
}

/// Build a search URL for an ad type with form-encoded query parameters.
///
/// Parameters are appended in the given order; repeated keys are kept.
///
/// # Examples
/// ```
/// use finn_client::config::search_url;
///
/// let url = search_url(
///     "https://cache.api.finn.no/iad/",
///     "realestate-homes",
///     &[("q", "oslo sentrum"), ("rows", "10")],
/// )
/// .unwrap();
/// assert_eq!(
///     url,
///     "https://cache.api.finn.no/iad/search/realestate-homes?q=oslo+sentrum&rows=10"
/// );
/// ```
pub fn search_url<I, K, V>(api_url: &str, ad_type: &str, params: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = api_endpoint(api_url, &format!("search/{ad_type}"))?;
    {
        let mut pairs = url.query_pairs_mut();
        for pair in params {
            let (key, value): &(K, V) = pair.borrow();
            pairs.append_pair(key.as_ref(), value.as_ref());
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url.to_string())
}

/// Build the URL of a single ad.
///
/// # Examples
/// ```
/// use finn_client::config::object_url;
///
/// assert_eq!(
///     object_url("https://cache.api.finn.no/iad", "realestate-homes", "123456").unwrap(),
///     "https://cache.api.finn.no/iad/ad/realestate-homes/123456"
/// );
/// ```
pub fn object_url(api_url: &str, ad_type: &str, finn_code: &str) -> Result<String> {
    Ok(api_endpoint(api_url, &format!("ad/{ad_type}/{finn_code}"))?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ad_type_valid() {
        assert!(validate_ad_type("realestate-homes").is_ok());
        assert!(validate_ad_type("realestate-letting").is_ok());
        assert!(validate_ad_type("car").is_ok());
    }

    #[test]
    fn test_validate_ad_type_invalid() {
        assert!(validate_ad_type("").is_err());
        assert!(validate_ad_type("Realestate").is_err());
        assert!(validate_ad_type("realestate--homes").is_err());
        assert!(validate_ad_type("realestate/homes").is_err());
        assert!(validate_ad_type("-homes").is_err());
    }

    #[test]
    fn test_validate_finn_code() {
        assert!(validate_finn_code("1").is_ok());
        assert!(validate_finn_code("123456789").is_ok());
        assert!(validate_finn_code("").is_err());
        assert!(validate_finn_code("1234567890123").is_err());
        assert!(validate_finn_code("12 34").is_err());
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url(API_URL, "realestate-homes", &[("location", "0.20061")]).unwrap(),
            "https://cache.api.finn.no/iad/search/realestate-homes?location=0.20061"
        );
    }

    #[test]
    fn test_search_url_without_params() {
        let params: [(&str, &str); 0] = [];
        assert_eq!(
            search_url(API_URL, "realestate-homes", &params).unwrap(),
            "https://cache.api.finn.no/iad/search/realestate-homes"
        );
    }

    #[test]
    fn test_search_url_keeps_repeated_keys() {
        let params = vec![
            ("property_type".to_string(), "1".to_string()),
            ("property_type".to_string(), "3".to_string()),
        ];
        assert_eq!(
            search_url("http://localhost:8080/iad", "realestate-homes", &params).unwrap(),
            "http://localhost:8080/iad/search/realestate-homes?property_type=1&property_type=3"
        );
    }

    #[test]
    fn test_object_url() {
        assert_eq!(
            object_url(API_URL, "realestate-homes", "98765432").unwrap(),
            "https://cache.api.finn.no/iad/ad/realestate-homes/98765432"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        let err = object_url("not a url", "realestate-homes", "1").unwrap_err();
        assert!(matches!(err, FinnError::InvalidUrl { .. }));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, API_URL);
        assert_eq!(config.timeout_secs, HTTP_TIMEOUT_SECS);
        assert_eq!(config.max_retries, MAX_RETRIES);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENV_API_URL => Some("http://localhost:9000/iad/".to_string()),
            ENV_HTTP_TIMEOUT_SECS => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://localhost:9000/iad/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_from_lookup_ignores_invalid_values() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENV_API_URL => Some("   ".to_string()),
            ENV_HTTP_TIMEOUT_SECS => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_config_builders() {
        let config = ClientConfig::default()
            .with_api_url("http://example.test/")
            .with_timeout_secs(3)
            .with_max_retries(1);
        assert_eq!(config.api_url, "http://example.test/");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.max_retries, 1);
    }
}
