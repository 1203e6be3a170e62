//! Extractors for the named `finn:field` elements of `finn:adata`.
//!
//! Each extractor folds one field element into the listing under
//! construction. Extractors are looked up by the field's `name` attribute
//! through a [`FieldRegistry`](crate::decode::FieldRegistry).

use roxmltree::Node;

use crate::types::Property;
use crate::xml::FeedScopes;

mod blocks;
mod scalar;
mod structured;

pub use blocks::{FacilitiesExtractor, GeneralTextExtractor, ViewingsExtractor};
pub use scalar::{ElementTextExtractor, EnergyExtractor, PropertyTypeExtractor, ValueExtractor};
pub use structured::{CadastreExtractor, PlotExtractor, SizeExtractor};

/// Accessor for a string slot of the listing under construction.
pub type StringSlot = fn(&mut Property) -> &mut String;

/// Trait for field extractors.
///
/// Extractors never fail: anything missing in the field leaves the
/// listing's default in place (or writes an empty string where the feed
/// explicitly overrides a value).
pub trait FieldExtractor: Send + Sync {
    /// Fold `field` into `property`.
    ///
    /// # Arguments
    /// * `field` - The `finn:field` element, already matched on its name
    /// * `scopes` - Namespace scopes of the current document
    /// * `property` - The listing being assembled
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property);
}

#[cfg(test)]
pub(crate) mod test_support {
    use roxmltree::Document;

    use super::FieldExtractor;
    use crate::types::Property;
    use crate::xml::{FeedScopes, Namespaces};

    /// Namespace URI used by extractor fixtures.
    pub const FINN_NS: &str = "http://api.finn.no/xmlns/ad";

    /// Run `extractor` on the root element of `xml` against a fresh listing.
    pub fn run(extractor: &dyn FieldExtractor, xml: &str) -> Property {
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();
        let namespaces = Namespaces::resolve(root);
        let scopes = FeedScopes::new(&namespaces);

        let mut property = Property::default();
        extractor.extract(root, &scopes, &mut property);
        property
    }
}
