//! Price elements (`finn:price`) of `finn:adata`.

use roxmltree::Node;

use crate::types::Price;
use crate::xml::{attr, find_children, FeedScopes};

/// Known price names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    /// `main`: asking price, with an optional from/to range.
    Main,
    /// `total`
    Total,
    /// `collective_debt`
    CollectiveDebt,
    /// `shared_cost`
    SharedCost,
    /// `estimated_value`
    EstimatedValue,
    /// `square_meter`
    SquareMeter,
}

impl PriceKind {
    /// Parse from the `name` attribute of a price element.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "main" => Some(Self::Main),
            "total" => Some(Self::Total),
            "collective_debt" => Some(Self::CollectiveDebt),
            "shared_cost" => Some(Self::SharedCost),
            "estimated_value" => Some(Self::EstimatedValue),
            "square_meter" => Some(Self::SquareMeter),
            _ => None,
        }
    }

    /// Copy this price element's attributes into the price block.
    pub fn apply(self, node: Node<'_, '_>, price: &mut Price) {
        let value = attr(node, "value");
        match self {
            Self::Main => {
                price.main = value;
                price.main_from = attr(node, "from");
                price.main_to = attr(node, "to");
            }
            Self::Total => price.total = value,
            Self::CollectiveDebt => price.collective_debt = value,
            Self::SharedCost => price.shared_cost = value,
            Self::EstimatedValue => price.estimated_value = value,
            Self::SquareMeter => price.square_meter = value,
        }
    }
}

/// Build the price block from the `finn:price` children of `adata`.
///
/// Unknown price names are ignored; a repeated name keeps the last value.
pub fn parse_prices(adata: Node<'_, '_>, scopes: &FeedScopes<'_>) -> Price {
    let mut price = Price::default();

    for node in find_children(adata, scopes.finn, "price") {
        if let Some(kind) = node.attribute("name").and_then(PriceKind::from_name) {
            kind.apply(node, &mut price);
        }
    }

    price
}
