//! HTTP transport for fetching FINN documents.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{ClientConfig, RETRY_BASE_DELAY_MS};
use crate::error::{FinnError, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("finn-client/", env!("CARGO_PKG_VERSION"));

/// Capability to fetch the raw bytes behind a URL.
///
/// Retry, timeout and caching policy belong to implementations; callers only
/// see the bytes or the failure.
pub trait Transport {
    /// Fetch the document at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the configured timeout and user agent.
pub fn create_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Result of a single request attempt.
enum Attempt {
    /// Response body of a successful request.
    Done(Vec<u8>),
    /// Transient failure worth another attempt.
    Transient(String),
}

/// Perform one GET. Transient failures (connection errors, timeouts, 5xx)
/// are returned as [`Attempt::Transient`]; anything else is an error.
fn attempt_get(client: &Client, url: &str) -> Result<Attempt> {
    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(e) if e.is_connect() || e.is_timeout() => {
            return Ok(Attempt::Transient(e.to_string()));
        }
        Err(e) => return Err(FinnError::Http(e)),
    };

    let status = response.status();
    if status.is_server_error() {
        return Ok(Attempt::Transient(format!("server responded {status}")));
    }

    let body = response.error_for_status()?.bytes()?;
    Ok(Attempt::Done(body.to_vec()))
}

/// Backoff before the given (zero-based) attempt: none for the first, then
/// doubling from [`RETRY_BASE_DELAY_MS`].
fn backoff(attempt: u32) -> Duration {
    match attempt {
        0 => Duration::ZERO,
        n => Duration::from_millis(RETRY_BASE_DELAY_MS << (n - 1).min(16)),
    }
}

/// Fetch a URL, retrying transient failures with exponential backoff.
///
/// Client errors (4xx) fail immediately.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - Document URL
/// * `max_retries` - Number of attempts; at least one is always made
pub fn download_bytes(client: &Client, url: &str, max_retries: u32) -> Result<Vec<u8>> {
    let attempts = max_retries.max(1);
    let mut last_failure = String::new();

    for attempt in 0..attempts {
        let delay = backoff(attempt);
        if !delay.is_zero() {
            tracing::debug!(url = %url, attempt, delay_ms = delay.as_millis() as u64, "Backing off");
            thread::sleep(delay);
        }

        match attempt_get(client, url)? {
            Attempt::Done(body) => return Ok(body),
            Attempt::Transient(reason) => {
                tracing::warn!(
                    url = %url,
                    attempt = attempt + 1,
                    of = attempts,
                    reason = %reason,
                    "Transient failure"
                );
                last_failure = reason;
            }
        }
    }

    Err(FinnError::RetriesExhausted {
        attempts,
        message: last_failure,
    })
}

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    client: Client,
    max_retries: u32,
}

impl HttpTransport {
    /// Create a transport from client settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            max_retries: config.max_retries,
        })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url = %url, "Fetching document");
        download_bytes(&self.client, url, self.max_retries).map_err(|e| {
            if let FinnError::Http(source) = e {
                FinnError::Fetch {
                    url: url.to_string(),
                    source,
                }
            } else {
                e
            }
        })
    }
}
