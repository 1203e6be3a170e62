//! Extractors for repeated `finn:value` blocks.
//!
//! Blocks are kept in document order, one output item per block.

use roxmltree::Node;

use super::FieldExtractor;
use crate::types::{GeneralText, Property, Viewing};
use crate::xml::{attr, direct_text, find_children, FeedScopes};

/// `facilities`: one string per nested value.
pub struct FacilitiesExtractor;

impl FieldExtractor for FacilitiesExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        property
            .facilities
            .extend(find_children(field, scopes.finn, "value").map(direct_text));
    }
}

/// `general_text`: one title/value pair per block, kept even when partial.
pub struct GeneralTextExtractor;

impl FieldExtractor for GeneralTextExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        for block in find_children(field, scopes.finn, "value") {
            let mut text = GeneralText::default();
            for part in find_children(block, scopes.finn, "field") {
                match part.attribute("name") {
                    Some("title") => text.title = attr(part, "value"),
                    Some("value") => text.value = direct_text(part),
                    _ => {}
                }
            }
            property.general_text.push(text);
        }
    }
}

/// `viewings`: date (element text) and from/to times per block.
pub struct ViewingsExtractor;

impl FieldExtractor for ViewingsExtractor {
    fn extract(&self, field: Node<'_, '_>, scopes: &FeedScopes<'_>, property: &mut Property) {
        for block in find_children(field, scopes.finn, "value") {
            let mut viewing = Viewing::default();
            for part in find_children(block, scopes.finn, "field") {
                match part.attribute("name") {
                    Some("date") => viewing.date = direct_text(part),
                    Some("from") => viewing.from = attr(part, "value"),
                    Some("to") => viewing.to = attr(part, "value"),
                    _ => {}
                }
            }
            property.viewings.push(viewing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::extractors::test_support::{run, FINN_NS};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_facilities_in_order() {
        let xml = format!(
            r#"<finn:field xmlns:finn="{FINN_NS}" name="facilities">
                <finn:value>Balkong/Terrasse</finn:value>
                <finn:value>Heis</finn:value>
                <finn:value>Balkong/Terrasse</finn:value>
            </finn:field>"#
        );
        let property = run(&FacilitiesExtractor, &xml);

        assert_eq!(
            property.facilities,
            vec!["Balkong/Terrasse", "Heis", "Balkong/Terrasse"]
        );
    }

    #[test]
    fn test_general_text_pairs() {
        let xml = format!(
            r#"<finn:field xmlns:finn="{FINN_NS}" name="general_text">
                <finn:value>
                    <finn:field name="title" value="Standard"/>
                    <finn:field name="value">Pent oppusset bad.</finn:field>
                </finn:value>
                <finn:value>
                    <finn:field name="value">Uten overskrift</finn:field>
                </finn:value>
                <finn:value>
                    <finn:field name="title" value="Parkering"/>
                </finn:value>
            </finn:field>"#
        );
        let property = run(&GeneralTextExtractor, &xml);

        assert_eq!(
            property.general_text,
            vec![
                GeneralText {
                    title: "Standard".to_string(),
                    value: "Pent oppusset bad.".to_string(),
                },
                GeneralText {
                    title: String::new(),
                    value: "Uten overskrift".to_string(),
                },
                GeneralText {
                    title: "Parkering".to_string(),
                    value: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_viewings_in_order() {
        let xml = format!(
            r#"<finn:field xmlns:finn="{FINN_NS}" name="viewings">
                <finn:value>
                    <finn:field name="date">2024-05-12</finn:field>
                    <finn:field name="from" value="13:00"/>
                    <finn:field name="to" value="14:00"/>
                </finn:value>
                <finn:value>
                    <finn:field name="date">2024-05-14</finn:field>
                    <finn:field name="from" value="17:30"/>
                </finn:value>
            </finn:field>"#
        );
        let property = run(&ViewingsExtractor, &xml);

        assert_eq!(
            property.viewings,
            vec![
                Viewing {
                    date: "2024-05-12".to_string(),
                    from: "13:00".to_string(),
                    to: "14:00".to_string(),
                },
                Viewing {
                    date: "2024-05-14".to_string(),
                    from: "17:30".to_string(),
                    to: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_blocks_outside_finn_namespace_are_ignored() {
        let xml = format!(
            r#"<finn:field xmlns:finn="{FINN_NS}" name="facilities">
                <value>Garasje</value>
            </finn:field>"#
        );
        let property = run(&FacilitiesExtractor, &xml);

        assert!(property.facilities.is_empty());
    }
}
