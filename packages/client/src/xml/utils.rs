//! XML utility functions for navigating namespaced DOM trees.

use roxmltree::Node;

use super::namespaces::Scope;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use finn_client::xml::get_tag_name;
///
/// let xml = r#"<feed xmlns:finn="urn:finn"><finn:adata/></feed>"#;
/// let doc = Document::parse(xml).unwrap();
/// let adata = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(adata), "adata");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local name in `scope`.
pub fn has_tag(node: Node<'_, '_>, scope: Scope<'_>, tag: &str) -> bool {
    scope.matches(node) && get_tag_name(node) == tag
}

/// Find the first child element with the given local name in `scope`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use finn_client::xml::{find_child, Scope};
///
/// let xml = r#"<entry xmlns:finn="urn:finn"><finn:location/><location/></entry>"#;
/// let doc = Document::parse(xml).unwrap();
/// let entry = doc.root_element();
///
/// assert!(find_child(entry, Scope::Uri("urn:finn"), "location").is_some());
/// assert!(find_child(entry, Scope::Undeclared, "location").is_none());
/// ```
pub fn find_child<'a, 'input>(
    node: Node<'a, 'input>,
    scope: Scope<'_>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, scope, tag))
}

/// Find all child elements with the given local name in `scope`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use finn_client::xml::{find_children, Scope};
///
/// let xml = r#"<adata><field/><price/><field/></adata>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let fields: Vec<_> = find_children(doc.root_element(), Scope::Unqualified, "field").collect();
/// assert_eq!(fields.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    scope: Scope<'a>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| has_tag(*child, scope, tag))
}

/// Concatenated text of the node's direct text children, untrimmed.
///
/// Text inside child elements is not included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use finn_client::xml::direct_text;
///
/// let doc = Document::parse("<field> Fin <b>bold</b>beliggenhet </field>").unwrap();
/// assert_eq!(direct_text(doc.root_element()), " Fin beliggenhet ");
/// ```
pub fn direct_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

/// Direct text of the first matching child, or empty string if absent.
pub fn child_text(node: Node<'_, '_>, scope: Scope<'_>, tag: &str) -> String {
    find_child(node, scope, tag)
        .map(direct_text)
        .unwrap_or_default()
}

/// Get an attribute value as an owned string, or empty string if absent.
pub fn attr(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

/// Value of the first attribute declared on the node, regardless of its name.
pub fn first_attribute<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attributes().next().map(|a| a.value())
}
