//! Client facade tying URL construction, transport and decoding together.

use std::borrow::Borrow;

use crate::config::{
    object_url, parse_url, search_url, validate_ad_type, validate_finn_code, ClientConfig,
};
use crate::decode::FeedDecoder;
use crate::error::Result;
use crate::http::{HttpTransport, Transport};
use crate::types::{Property, Resultset};

/// Client for the FINN `iad` API.
///
/// Generic over the [`Transport`] so documents can come from HTTP or from
/// any other source.
pub struct FinnClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    decoder: FeedDecoder,
}

impl FinnClient<HttpTransport> {
    /// Create a client that fetches over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> FinnClient<T> {
    /// Create a client on top of an existing transport.
    #[must_use]
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            decoder: FeedDecoder::new(),
        }
    }

    /// Get the client settings.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search listings of an ad type.
    ///
    /// # Arguments
    /// * `ad_type` - FINN vertical, e.g. `realestate-homes`
    /// * `params` - Query parameters, appended in order
    pub fn search<I, K, V>(&self, ad_type: &str, params: I) -> Result<Resultset>
    where
        I: IntoIterator,
        I::Item: Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        validate_ad_type(ad_type)?;
        let url = search_url(&self.config.api_url, ad_type, params)?;
        self.fetch_resultset(&url)
    }

    /// Get a single listing by ad type and FINN code.
    pub fn get_object(&self, ad_type: &str, finn_code: &str) -> Result<Property> {
        validate_ad_type(ad_type)?;
        validate_finn_code(finn_code)?;
        let url = object_url(&self.config.api_url, ad_type, finn_code)?;
        self.get_object_by_url(&url)
    }

    /// Get a single listing from its API URL.
    pub fn get_object_by_url(&self, url: &str) -> Result<Property> {
        parse_url(url)?;
        let bytes = self.transport.fetch(url)?;
        let property = self.decoder.decode_entry_bytes(&bytes)?;
        tracing::info!(url = %url, id = %property.id, "Decoded listing");
        Ok(property)
    }

    /// Fetch the page after `resultset`, following its `next` link.
    ///
    /// Returns `Ok(None)` on the last page.
    pub fn next_page(&self, resultset: &Resultset) -> Result<Option<Resultset>> {
        match resultset.next_link() {
            Some(url) => self.fetch_resultset(url).map(Some),
            None => Ok(None),
        }
    }

    fn fetch_resultset(&self, url: &str) -> Result<Resultset> {
        parse_url(url)?;
        let bytes = self.transport.fetch(url)?;
        let resultset = self.decoder.decode_resultset_bytes(&bytes)?;
        tracing::info!(
            url = %url,
            results = resultset.len(),
            total = %resultset.total_results,
            "Decoded result set"
        );
        Ok(resultset)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::FinnError;

    /// Serves canned documents and records requested URLs.
    #[derive(Default)]
    struct StaticTransport {
        documents: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl StaticTransport {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.documents.insert(url.to_string(), body.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for StaticTransport {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(url.to_string());
            self.documents
                .get(url)
                .map(|body| body.as_bytes().to_vec())
                .ok_or_else(|| FinnError::RetriesExhausted {
                    attempts: 1,
                    message: format!("no document for {url}"),
                })
        }
    }

    const API: &str = "https://cache.api.finn.no/iad/";

    const ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom"
        xmlns:dc="http://purl.org/dc/terms/">
        <dc:identifier>42</dc:identifier>
    </entry>"#;

    const PAGE_1: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <link rel="next" href="https://cache.api.finn.no/iad/search/realestate-homes?page=2"/>
        <entry/>
    </feed>"#;

    const PAGE_2: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry/><entry/></feed>"#;

    fn client(transport: StaticTransport) -> FinnClient<StaticTransport> {
        FinnClient::with_transport(transport, ClientConfig::default().with_api_url(API))
    }

    #[test]
    fn test_get_object_builds_url() {
        let transport = StaticTransport::default().with(
            "https://cache.api.finn.no/iad/ad/realestate-homes/42",
            ENTRY,
        );
        let client = client(transport);

        let property = client.get_object("realestate-homes", "42").unwrap();
        assert_eq!(property.id, "42");
    }

    #[test]
    fn test_get_object_validates_input() {
        let client = client(StaticTransport::default());

        assert!(matches!(
            client.get_object("realestate-homes", "42/../1"),
            Err(FinnError::InvalidFinnCode(_))
        ));
        assert!(matches!(
            client.get_object("Real Estate", "42"),
            Err(FinnError::InvalidAdType(_))
        ));
        assert!(client.transport.requests().is_empty());
    }

    #[test]
    fn test_search_and_next_page() {
        let transport = StaticTransport::default()
            .with(
                "https://cache.api.finn.no/iad/search/realestate-homes?location=0.20061",
                PAGE_1,
            )
            .with(
                "https://cache.api.finn.no/iad/search/realestate-homes?page=2",
                PAGE_2,
            );
        let client = client(transport);

        let first = client
            .search("realestate-homes", &[("location", "0.20061")])
            .unwrap();
        assert_eq!(first.len(), 1);

        let second = client.next_page(&first).unwrap().unwrap();
        assert_eq!(second.len(), 2);
        assert!(client.next_page(&second).unwrap().is_none());
    }

    #[test]
    fn test_transport_failure_is_propagated() {
        let client = client(StaticTransport::default());
        let err = client.get_object_by_url("https://example.test/missing").unwrap_err();

        assert!(matches!(err, FinnError::RetriesExhausted { .. }));
    }

    #[test]
    fn test_malformed_document_is_propagated() {
        let transport =
            StaticTransport::default().with("https://example.test/broken", "<entry><title>");
        let client = client(transport);

        let err = client.get_object_by_url("https://example.test/broken").unwrap_err();
        assert!(err.is_malformed_document());
    }

    #[test]
    fn test_get_object_by_url_rejects_relative_url() {
        let client = client(StaticTransport::default());
        assert!(matches!(
            client.get_object_by_url("/iad/ad/realestate-homes/1"),
            Err(FinnError::InvalidUrl { .. })
        ));
    }
}
