//! Extractors for fields with nested, named sub-fields.

use roxmltree::Node;

use super::FieldExtractor;
use crate::types::Property;
use crate::xml::{attr, find_child, find_children, FeedScopes};

/// `size`: usable/primary area plus the living-size range.
///
/// The range is read from the `size` field itself and then overwritten by
/// every nested field visited, so the last nested field decides.
pub struct SizeExtractor;

impl FieldExtractor for SizeExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        let own_from = field.attribute("from");
        let own_to = field.attribute("to");

        if let Some(from) = own_from {
            property.living_size_from = from.to_string();
        }
        if let Some(to) = own_to {
            property.living_size_to = to.to_string();
        }

        for size_field in find_children(field, scopes.finn, "field") {
            match size_field.attribute("name") {
                Some("usable") => property.usable_size = attr(size_field, "value"),
                Some("primary") => property.primary_size = attr(size_field, "value"),
                _ => {}
            }

            property.living_size_from = size_field
                .attribute("from")
                .or(own_from)
                .unwrap_or_default()
                .to_string();
            property.living_size_to = size_field
                .attribute("to")
                .or(own_to)
                .unwrap_or_default()
                .to_string();
        }
    }
}

/// `plot`: area, and whether the plot is owned.
pub struct PlotExtractor;

impl FieldExtractor for PlotExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        for plot_field in find_children(field, scopes.finn, "field") {
            match plot_field.attribute("name") {
                Some("area") => property.plot.area = attr(plot_field, "value"),
                // Presence alone marks ownership; the value is not inspected.
                Some("owned") => property.plot.owned = true,
                _ => {}
            }
        }
    }
}

/// `cadastres`: identifiers of the first cadastral unit only.
pub struct CadastreExtractor;

impl FieldExtractor for CadastreExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        let Some(first_unit) = find_child(field, scopes.finn, "value") else {
            return;
        };

        for unit_field in find_children(first_unit, scopes.finn, "field") {
            let value = attr(unit_field, "value");
            match unit_field.attribute("name") {
                Some("cadastral_unit_number") => property.cadastre.cadastral_unit_number = value,
                Some("property_unit_number") => property.cadastre.property_unit_number = value,
                Some("section_number") => property.cadastre.section_number = value,
                _ => {}
            }
        }
    }
}
