//! Mapping of a single Atom `entry` element to a [`Property`].

use roxmltree::Node;

use super::price::parse_prices;
use super::registry::FieldRegistry;
use crate::types::{Contact, Links, Property};
use crate::xml::{
    attr, child_text, direct_text, find_child, find_children, first_attribute, FeedScopes,
};

/// Category scheme flagging private sellers.
pub const SCHEME_PRIVATE: &str = "urn:finn:ad:private";

/// Category scheme flagging disposed (sold/rented) ads.
pub const SCHEME_DISPOSED: &str = "urn:finn:ad:disposed";

/// Category scheme carrying the ad type label.
pub const SCHEME_TYPE: &str = "urn:finn:ad:type";

/// Map one `entry` element to a listing.
///
/// Every part of the entry is optional; whatever is missing keeps the
/// listing's default value.
///
/// # Arguments
/// * `entry` - The `entry` element
/// * `scopes` - Namespace scopes resolved for the document
/// * `fields` - Extractors for the `finn:adata` fields
pub fn map_entry(entry: Node<'_, '_>, scopes: &FeedScopes<'_>, fields: &FieldRegistry) -> Property {
    let mut property = Property {
        id: child_text(entry, scopes.dc, "identifier"),
        title: child_text(entry, scopes.atom, "title"),
        updated: child_text(entry, scopes.atom, "updated"),
        published: child_text(entry, scopes.atom, "published"),
        links: parse_links(entry, scopes),
        georss: child_text(entry, scopes.georss, "point"),
        contacts: parse_contacts(entry, scopes),
        images: parse_images(entry, scopes),
        author: find_child(entry, scopes.atom, "author")
            .map(|author| child_text(author, scopes.atom, "name"))
            .unwrap_or_default(),
        ..Property::default()
    };

    apply_categories(entry, scopes, &mut property);
    apply_location(entry, scopes, &mut property);

    if let Some(adata) = find_child(entry, scopes.finn, "adata") {
        apply_fields(adata, scopes, fields, &mut property);
        property.price = parse_prices(adata, scopes);
    }

    property
}

/// Collect `link` elements into a relation map. A repeated relation keeps
/// the last URL.
pub fn parse_links(node: Node<'_, '_>, scopes: &FeedScopes<'_>) -> Links {
    let mut links = Links::new();
    for link in find_children(node, scopes.atom, "link") {
        links.insert(attr(link, "rel"), attr(link, "href"));
    }
    links
}

fn apply_categories(entry: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
    for category in find_children(entry, scopes.atom, "category") {
        match category.attribute("scheme") {
            Some(SCHEME_PRIVATE) => property.is_private = attr(category, "term"),
            Some(SCHEME_DISPOSED) => {
                if category.attribute("term") == Some("true") {
                    property.status = attr(category, "label");
                }
            }
            Some(SCHEME_TYPE) => property.ad_type = attr(category, "label"),
            _ => {}
        }
    }
}

fn apply_location(entry: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
    let Some(location) = find_child(entry, scopes.finn, "location") else {
        return;
    };

    property.city = child_text(location, scopes.finn, "city");
    property.address = child_text(location, scopes.finn, "address");
    property.postal_code = child_text(location, scopes.finn, "postal-code");
}

/// Phone number types of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhoneKind {
    Work,
    Mobile,
    Fax,
}

impl PhoneKind {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "work" => Some(Self::Work),
            "mobile" => Some(Self::Mobile),
            "fax" => Some(Self::Fax),
            _ => None,
        }
    }

    fn slot(self, contact: &mut Contact) -> &mut String {
        match self {
            Self::Work => &mut contact.work,
            Self::Mobile => &mut contact.mobile,
            Self::Fax => &mut contact.fax,
        }
    }
}

fn parse_contacts(entry: Node<'_, '_>, scopes: &FeedScopes<'_>) -> Vec<Contact> {
    find_children(entry, scopes.finn, "contact")
        .map(|node| parse_contact(node, scopes))
        .collect()
}

/// Build one contact. Phone numbers are typed by their `type` attribute
/// (or, lacking one, their first attribute); the last number of each type
/// wins.
fn parse_contact(node: Node<'_, '_>, scopes: &FeedScopes<'_>) -> Contact {
    let name = find_child(node, scopes.atom, "name")
        .or_else(|| find_child(node, scopes.finn, "name"))
        .map(direct_text)
        .unwrap_or_default();

    let mut contact = Contact {
        name,
        title: attr(node, "title"),
        ..Contact::default()
    };

    for phone in find_children(node, scopes.finn, "phone-number") {
        let kind = phone
            .attribute("type")
            .or_else(|| first_attribute(phone))
            .and_then(PhoneKind::from_marker);
        if let Some(kind) = kind {
            *kind.slot(&mut contact) = direct_text(phone);
        }
    }

    contact
}

/// One reference per `media:content`, taken from its first attribute.
/// Elements without attributes contribute an empty string.
fn parse_images(entry: Node<'_, '_>, scopes: &FeedScopes<'_>) -> Vec<String> {
    find_children(entry, scopes.media, "content")
        .map(|content| first_attribute(content).unwrap_or_default().to_string())
        .collect()
}

fn apply_fields(
    adata: Node<'_, '_>,
    scopes: &FeedScopes<'_>,
    fields: &FieldRegistry,
    property: &mut Property,
) {
    for field in find_children(adata, scopes.finn, "field") {
        let extractor = field.attribute("name").and_then(|name| fields.get(name));
        if let Some(extractor) = extractor {
            extractor.extract(field, scopes, property);
        }
    }
}
