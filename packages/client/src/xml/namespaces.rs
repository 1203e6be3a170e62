//! Namespace resolution for FINN feed documents.
//!
//! Prefixes are resolved once per document. Every later lookup goes through
//! a [`Scope`], so a feed that never declares e.g. `georss` simply yields
//! nothing for those elements.

use std::collections::HashMap;

use roxmltree::Node;

/// Prefix under which the default namespace is stored.
pub const DEFAULT_PREFIX: &str = "";

/// Mapping from namespace prefix to namespace URI for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespaces {
    prefixes: HashMap<String, String>,
}

impl Namespaces {
    /// Collect every namespace binding in the subtree rooted at `root`.
    ///
    /// The default namespace is stored under the empty prefix. When a prefix
    /// is bound more than once, the first binding in document order wins.
    ///
    /// # Examples
    /// ```
    /// use roxmltree::Document;
    /// use finn_client::xml::Namespaces;
    ///
    /// let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
    ///     <entry xmlns:finn="urn:finn:core"/>
    /// </feed>"#;
    /// let doc = Document::parse(xml).unwrap();
    /// let ns = Namespaces::resolve(doc.root_element());
    ///
    /// assert_eq!(ns.uri(""), Some("http://www.w3.org/2005/Atom"));
    /// assert_eq!(ns.uri("finn"), Some("urn:finn:core"));
    /// ```
    #[must_use]
    pub fn resolve(root: Node<'_, '_>) -> Self {
        let mut prefixes = HashMap::new();

        for node in root.descendants().filter(|n| n.is_element()) {
            for namespace in node.namespaces() {
                let prefix = namespace.name().unwrap_or(DEFAULT_PREFIX);
                prefixes
                    .entry(prefix.to_string())
                    .or_insert_with(|| namespace.uri().to_string());
            }
        }

        Self { prefixes }
    }

    /// URI bound to `prefix`, if any.
    #[must_use]
    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Lookup scope for elements written with `prefix`.
    ///
    /// An undeclared default namespace means "no namespace"; an undeclared
    /// named prefix matches nothing.
    #[must_use]
    pub fn scope(&self, prefix: &str) -> Scope<'_> {
        match self.uri(prefix) {
            Some(uri) => Scope::Uri(uri),
            None if prefix == DEFAULT_PREFIX => Scope::Unqualified,
            None => Scope::Undeclared,
        }
    }

    /// Number of resolved prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether no namespace was declared at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// The namespace an element lookup is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Elements bound to this namespace URI.
    Uri(&'a str),
    /// Elements without a namespace.
    Unqualified,
    /// Prefix not declared in the document; matches no element.
    Undeclared,
}

impl Scope<'_> {
    /// Whether `node` is an element in this scope.
    #[must_use]
    pub fn matches(self, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            Scope::Uri(uri) => node.tag_name().namespace() == Some(uri),
            Scope::Unqualified => node.tag_name().namespace().is_none(),
            Scope::Undeclared => false,
        }
    }
}

/// Scopes for the vocabularies used by FINN feeds, resolved once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedScopes<'a> {
    /// Default namespace (Atom).
    pub atom: Scope<'a>,
    /// Dublin Core (`dc:identifier`).
    pub dc: Scope<'a>,
    /// GeoRSS (`georss:point`).
    pub georss: Scope<'a>,
    /// FINN vocabulary (`finn:adata`, `finn:location`, ...).
    pub finn: Scope<'a>,
    /// Media RSS (`media:content`).
    pub media: Scope<'a>,
    /// OpenSearch (`os:totalResults`).
    pub os: Scope<'a>,
}

impl<'a> FeedScopes<'a> {
    /// Resolve the conventional FINN prefixes.
    #[must_use]
    pub fn new(namespaces: &'a Namespaces) -> Self {
        Self {
            atom: namespaces.scope(DEFAULT_PREFIX),
            dc: namespaces.scope("dc"),
            georss: namespaces.scope("georss"),
            finn: namespaces.scope("finn"),
            media: namespaces.scope("media"),
            os: namespaces.scope("os"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom"
        xmlns:dc="http://purl.org/dc/terms/"
        xmlns:os="http://a9.com/-/spec/opensearch/1.1/">
        <entry xmlns:finn="http://api.finn.no/xmlns/ad" xmlns:georss="http://www.georss.org/georss">
            <finn:adata/>
        </entry>
    </feed>"#;

    #[test]
    fn test_resolve_collects_nested_declarations() {
        let doc = Document::parse(FEED).unwrap();
        let ns = Namespaces::resolve(doc.root_element());

        assert_eq!(ns.uri(""), Some("http://www.w3.org/2005/Atom"));
        assert_eq!(ns.uri("dc"), Some("http://purl.org/dc/terms/"));
        assert_eq!(ns.uri("finn"), Some("http://api.finn.no/xmlns/ad"));
        assert_eq!(ns.uri("georss"), Some("http://www.georss.org/georss"));
        assert_eq!(ns.uri("media"), None);
    }

    #[test]
    fn test_resolve_first_binding_wins() {
        let xml = r#"<root xmlns:x="urn:first"><child xmlns:x="urn:second"/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let ns = Namespaces::resolve(doc.root_element());

        assert_eq!(ns.uri("x"), Some("urn:first"));
    }

    #[test]
    fn test_scope_for_missing_prefixes() {
        let doc = Document::parse("<entry><title>t</title></entry>").unwrap();
        let ns = Namespaces::resolve(doc.root_element());

        assert_eq!(ns.scope(""), Scope::Unqualified);
        assert_eq!(ns.scope("finn"), Scope::Undeclared);
    }

    #[test]
    fn test_scope_matches() {
        let doc = Document::parse(FEED).unwrap();
        let ns = Namespaces::resolve(doc.root_element());
        let adata = doc
            .descendants()
            .find(|n| n.has_tag_name("adata"))
            .unwrap();
        let entry = adata.parent_element().unwrap();

        assert!(ns.scope("finn").matches(adata));
        assert!(!ns.scope("").matches(adata));
        assert!(ns.scope("").matches(entry));
        assert!(!ns.scope("media").matches(adata));
    }

    #[test]
    fn test_unqualified_scope_matches_plain_elements() {
        let doc = Document::parse("<entry><title>t</title></entry>").unwrap();
        let title = doc.root_element().first_element_child().unwrap();

        assert!(Scope::Unqualified.matches(title));
        assert!(!Scope::Undeclared.matches(title));
        assert!(!Scope::Uri("urn:x").matches(title));
    }

    #[test]
    fn test_feed_scopes() {
        let doc = Document::parse(FEED).unwrap();
        let ns = Namespaces::resolve(doc.root_element());
        let scopes = FeedScopes::new(&ns);

        assert_eq!(scopes.atom, Scope::Uri("http://www.w3.org/2005/Atom"));
        assert_eq!(scopes.finn, Scope::Uri("http://api.finn.no/xmlns/ad"));
        assert_eq!(scopes.media, Scope::Undeclared);
    }
}
