//! Error types for the FINN client.
//!
//! A single `FinnError` covers the decoder, the transport and the CLI.
//! Missing feed fields are never errors; they decode to defaults.

use thiserror::Error;

/// Main error type for the FINN client library.
#[derive(Debug, Error)]
pub enum FinnError {
    /// Invalid ad type (search vertical) format.
    #[error("Invalid ad type: '{0}'. Expected lowercase words joined by '-' (e.g., realestate-homes)")]
    InvalidAdType(String),

    /// Invalid FINN code format.
    #[error("Invalid FINN code: '{0}'. Expected digits only (e.g., 123456789)")]
    InvalidFinnCode(String),

    /// URL could not be parsed or built.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch a document from the API.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts failed.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The document is not well-formed XML.
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// The document bytes are not valid UTF-8.
    #[error("Malformed document: invalid UTF-8 ({0})")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FinnError {
    /// Whether the error means the input could not be read as an XML document.
    #[must_use]
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument(_) | Self::InvalidEncoding(_))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, FinnError>;
