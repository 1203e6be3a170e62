//! Feed envelope parsing and result set assembly.

use roxmltree::Node;

use super::entry::{map_entry, parse_links};
use super::registry::FieldRegistry;
use crate::types::Resultset;
use crate::xml::{child_text, find_children, FeedScopes};

/// Parse the document-level metadata of a `feed` element.
///
/// Returns a result set with title, subtitle, total and navigation links
/// filled in and no results.
pub fn parse_envelope(feed: Node<'_, '_>, scopes: &FeedScopes<'_>) -> Resultset {
    Resultset {
        title: child_text(feed, scopes.atom, "title"),
        subtitle: child_text(feed, scopes.atom, "subtitle"),
        total_results: child_text(feed, scopes.os, "totalResults"),
        links: parse_links(feed, scopes),
        results: Vec::new(),
    }
}

/// Build a result set from a `feed` element, one listing per `entry` in
/// document order.
pub fn assemble_resultset(
    feed: Node<'_, '_>,
    scopes: &FeedScopes<'_>,
    fields: &FieldRegistry,
) -> Resultset {
    let mut resultset = parse_envelope(feed, scopes);
    resultset.results = find_children(feed, scopes.atom, "entry")
        .map(|entry| map_entry(entry, scopes, fields))
        .collect();
    resultset
}
