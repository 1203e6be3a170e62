//! Field registry mapping `finn:field` names to extractors.

use std::collections::{HashMap, HashSet};

use super::extractors::{
    CadastreExtractor, ElementTextExtractor, EnergyExtractor, FacilitiesExtractor,
    FieldExtractor, GeneralTextExtractor, PlotExtractor, PropertyTypeExtractor, SizeExtractor,
    ValueExtractor, ViewingsExtractor,
};

/// Registry mapping field names to extractors.
///
/// Names without a registered extractor are ignored by the decoder, so new
/// fields in the feed never break decoding.
pub struct FieldRegistry {
    extractors: HashMap<String, Box<dyn FieldExtractor>>,
}

impl FieldRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor for a field name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, extractor: impl FieldExtractor + 'static) {
        self.extractors.insert(name.into(), Box::new(extractor));
    }

    /// Get the extractor for a field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn FieldExtractor> {
        self.extractors.get(name).map(|e| e.as_ref())
    }

    /// Check if an extractor is registered for a field name.
    #[must_use]
    pub fn has_extractor(&self, name: &str) -> bool {
        self.extractors.contains_key(name)
    }

    /// Return set of all registered field names.
    #[must_use]
    pub fn registered_names(&self) -> HashSet<&str> {
        self.extractors.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry for the `finn:adata` fields of real-estate ads.
#[must_use]
pub fn create_adata_registry() -> FieldRegistry {
    let mut registry = FieldRegistry::new();

    // Single values
    registry.register("no_of_bedrooms", ValueExtractor::new(|p| &mut p.number_of_bedrooms));
    registry.register("ownership_type", ValueExtractor::new(|p| &mut p.ownership_type));
    registry.register("property_type", PropertyTypeExtractor);
    registry.register("ingress", ElementTextExtractor::new(|p| &mut p.ingress));
    registry.register("situation", ElementTextExtractor::new(|p| &mut p.situation));
    registry.register("energy_label", EnergyExtractor::Label);
    registry.register("energy_label_color_code", EnergyExtractor::ColorCode);

    // Nested sub-fields
    registry.register("size", SizeExtractor);
    registry.register("plot", PlotExtractor);
    registry.register("cadastres", CadastreExtractor);

    // Repeated value blocks
    registry.register("facilities", FacilitiesExtractor);
    registry.register("general_text", GeneralTextExtractor);
    registry.register("viewings", ViewingsExtractor);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::extractors::test_support::run;

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FieldRegistry::new();
        registry.register("plot", PlotExtractor);

        assert!(registry.get("plot").is_some());
        assert!(registry.get("size").is_none());
    }

    #[test]
    fn test_registry_replaces_extractor() {
        let mut registry = FieldRegistry::new();
        registry.register("energy_label", EnergyExtractor::Label);
        registry.register("energy_label", EnergyExtractor::ColorCode);

        let extractor = registry.get("energy_label").unwrap();
        let property = run(extractor, r#"<field name="energy_label" value="B"/>"#);
        assert_eq!(property.energy.label, "");
        assert_eq!(property.energy.label_color_code, "B");
    }

    #[test]
    fn test_create_adata_registry() {
        let registry = create_adata_registry();

        let expected: HashSet<&str> = [
            "no_of_bedrooms",
            "ownership_type",
            "property_type",
            "ingress",
            "situation",
            "energy_label",
            "energy_label_color_code",
            "size",
            "plot",
            "cadastres",
            "facilities",
            "general_text",
            "viewings",
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.registered_names(), expected);
        assert!(!registry.has_extractor("unknown_field"));
    }
}
