//! Extractors for single-valued fields.

use roxmltree::Node;

use super::{FieldExtractor, StringSlot};
use crate::types::Property;
use crate::xml::{attr, child_text, direct_text, FeedScopes};

/// Copies the field's `value` attribute into a string slot.
///
/// Used for `no_of_bedrooms` and `ownership_type`.
pub struct ValueExtractor {
    slot: StringSlot,
}

impl ValueExtractor {
    #[must_use]
    pub fn new(slot: StringSlot) -> Self {
        Self { slot }
    }
}

impl FieldExtractor for ValueExtractor {
    fn extract(&self, field: Node<'_, '_>, _scopes: &FeedScopes<'_>, property: &mut Property) {
        *(self.slot)(property) = attr(field, "value");
    }
}

/// Copies the field's own text into a string slot.
///
/// Used for `ingress` and `situation`.
pub struct ElementTextExtractor {
    slot: StringSlot,
}

impl ElementTextExtractor {
    #[must_use]
    pub fn new(slot: StringSlot) -> Self {
        Self { slot }
    }
}

impl FieldExtractor for ElementTextExtractor {
    fn extract(&self, field: Node<'_, '_>, _scopes: &FeedScopes<'_>, property: &mut Property) {
        *(self.slot)(property) = direct_text(field);
    }
}

/// `property_type`: text of the first nested `finn:value`.
pub struct PropertyTypeExtractor;

impl FieldExtractor for PropertyTypeExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        property.property_type = child_text(field, scopes.finn, "value");
    }
}

/// Top-level energy fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyExtractor {
    /// `energy_label`
    Label,
    /// `energy_label_color_code`
    ColorCode,
}

impl FieldExtractor for EnergyExtractor {
    fn extract(&self, field: Node<'_, '_>, _scopes: &FeedScopes<'_>, property: &mut Property) {
        let value = attr(field, "value");
        match self {
            Self::Label => property.energy.label = value,
            Self::ColorCode => property.energy.label_color_code = value,
        }
    }
}
