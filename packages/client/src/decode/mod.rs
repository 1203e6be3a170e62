//! Decoding of FINN Atom documents into [`Property`] and [`Resultset`].
//!
//! Decoding is a single synchronous pass over a parsed `roxmltree`
//! document. Namespaces are resolved once per document; `finn:field`
//! elements are dispatched by name through a [`FieldRegistry`].

mod entry;
pub mod extractors;
mod feed;
mod price;
mod registry;

use std::sync::LazyLock;

use roxmltree::Document;

use crate::error::Result;
use crate::types::{Decoded, Property, Resultset};
use crate::xml::{get_tag_name, FeedScopes, Namespaces};

pub use entry::{map_entry, parse_links, SCHEME_DISPOSED, SCHEME_PRIVATE, SCHEME_TYPE};
pub use extractors::FieldExtractor;
pub use feed::{assemble_resultset, parse_envelope};
pub use price::{parse_prices, PriceKind};
pub use registry::{create_adata_registry, FieldRegistry};

/// Decoder for FINN feed and entry documents.
///
/// Holds only the immutable field registry, so one decoder can be shared
/// between threads and reused for any number of documents.
pub struct FeedDecoder {
    fields: FieldRegistry,
}

impl FeedDecoder {
    /// Create a decoder with the standard real-estate field registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(create_adata_registry())
    }

    /// Create a decoder with a custom field registry.
    #[must_use]
    pub fn with_registry(fields: FieldRegistry) -> Self {
        Self { fields }
    }

    /// Get a reference to the field registry.
    #[must_use]
    pub fn registry(&self) -> &FieldRegistry {
        &self.fields
    }

    /// Decode a single-entry document.
    ///
    /// # Errors
    /// Returns `MalformedDocument` if `xml` is not well-formed.
    pub fn decode_entry(&self, xml: &str) -> Result<Property> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        let namespaces = Namespaces::resolve(root);
        let scopes = FeedScopes::new(&namespaces);
        Ok(map_entry(root, &scopes, &self.fields))
    }

    /// Decode a feed (search result) document.
    ///
    /// # Errors
    /// Returns `MalformedDocument` if `xml` is not well-formed.
    pub fn decode_resultset(&self, xml: &str) -> Result<Resultset> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        let namespaces = Namespaces::resolve(root);
        let scopes = FeedScopes::new(&namespaces);
        Ok(assemble_resultset(root, &scopes, &self.fields))
    }

    /// Decode either kind of document, chosen by the root element name.
    ///
    /// # Errors
    /// Returns `MalformedDocument` if `xml` is not well-formed.
    pub fn decode_document(&self, xml: &str) -> Result<Decoded> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        let namespaces = Namespaces::resolve(root);
        let scopes = FeedScopes::new(&namespaces);

        if get_tag_name(root) == "feed" {
            Ok(Decoded::Feed(assemble_resultset(root, &scopes, &self.fields)))
        } else {
            Ok(Decoded::Entry(Box::new(map_entry(root, &scopes, &self.fields))))
        }
    }

    /// Decode a single-entry document from raw bytes.
    ///
    /// # Errors
    /// Returns `InvalidEncoding` for non-UTF-8 input and `MalformedDocument`
    /// for XML that is not well-formed.
    pub fn decode_entry_bytes(&self, bytes: &[u8]) -> Result<Property> {
        self.decode_entry(std::str::from_utf8(bytes)?)
    }

    /// Decode a feed document from raw bytes.
    ///
    /// # Errors
    /// Returns `InvalidEncoding` for non-UTF-8 input and `MalformedDocument`
    /// for XML that is not well-formed.
    pub fn decode_resultset_bytes(&self, bytes: &[u8]) -> Result<Resultset> {
        self.decode_resultset(std::str::from_utf8(bytes)?)
    }
}

impl Default for FeedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_DECODER: LazyLock<FeedDecoder> = LazyLock::new(FeedDecoder::new);

/// Decode a single-entry document with the standard registry.
///
/// # Examples
/// ```
/// let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"
///     xmlns:dc="http://purl.org/dc/terms/">
///     <dc:identifier>123456789</dc:identifier>
///     <title>Lys 3-roms</title>
/// </entry>"#;
///
/// let property = finn_client::decode_entry(xml).unwrap();
/// assert_eq!(property.id, "123456789");
/// assert_eq!(property.is_private, "false");
/// ```
pub fn decode_entry(xml: &str) -> Result<Property> {
    DEFAULT_DECODER.decode_entry(xml)
}

/// Decode a feed document with the standard registry.
pub fn decode_resultset(xml: &str) -> Result<Resultset> {
    DEFAULT_DECODER.decode_resultset(xml)
}
