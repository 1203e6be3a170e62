//! FINN client - Fetch real-estate listings from the FINN.no `iad` API and
//! decode its Atom documents into typed records.
//!
//! # Example
//!
//! ```
//! use finn_client::FeedDecoder;
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"
//!     xmlns:os="http://a9.com/-/spec/opensearch/1.1/">
//!     <title>Søk</title>
//!     <os:totalResults>2</os:totalResults>
//!     <entry/>
//!     <entry/>
//! </feed>"#;
//!
//! let resultset = FeedDecoder::new().decode_resultset(xml).unwrap();
//! assert_eq!(resultset.total_results, "2");
//! assert_eq!(resultset.len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, environment settings and URL building
//! - [`types`]: Decoded records (Property, Resultset, etc.)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace resolution and element lookup helpers
//! - [`decode`]: Entry/feed decoding with the `finn:field` registry
//! - [`http`]: Transport trait and the retrying HTTP implementation
//! - [`client`]: Client facade for search and single-listing lookup
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod types;
pub mod xml;

pub use client::FinnClient;
pub use config::ClientConfig;
pub use decode::{decode_entry, decode_resultset, FeedDecoder, FieldExtractor, FieldRegistry};
pub use error::{FinnError, Result};
pub use http::{HttpTransport, Transport};
pub use types::{
    Cadastre, Contact, Decoded, Energy, GeneralText, Links, Plot, Price, Property, Resultset,
    Viewing,
};
