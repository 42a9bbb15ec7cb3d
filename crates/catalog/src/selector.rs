//! Snapshot selectors.

use serde::{Deserialize, Serialize};

use offersync_core::{OrderUid, ProductRef, ProductUid};

/// Scope of one catalog snapshot read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductSelector {
    /// Every sellable position in the catalog (bulk triggers).
    All,
    /// Every position of one product, whatever its offers and variations.
    Product(ProductUid),
    /// Exactly one position.
    Tuple(ProductRef),
    /// The positions referenced by an order's line items.
    Order(OrderUid),
}

impl ProductSelector {
    /// Row-local match. `Order` selectors cannot be decided per row; the
    /// provider resolves the order to its line references first.
    pub fn matches_ref(&self, reference: &ProductRef) -> bool {
        match self {
            Self::All => true,
            Self::Product(product) => reference.product == *product,
            Self::Tuple(tuple) => reference == tuple,
            Self::Order(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offersync_core::OfferUid;

    #[test]
    fn product_selector_spans_all_offers() {
        let product = ProductUid::new();
        let with_offer = ProductRef::new(product, Some(OfferUid::new()), None, None);
        let without_offer = ProductRef::for_product(product);

        let selector = ProductSelector::Product(product);
        assert!(selector.matches_ref(&with_offer));
        assert!(selector.matches_ref(&without_offer));
        assert!(!selector.matches_ref(&ProductRef::for_product(ProductUid::new())));
    }

    #[test]
    fn tuple_selector_requires_every_level() {
        let product = ProductUid::new();
        let offer = OfferUid::new();
        let exact = ProductRef::new(product, Some(offer), None, None);

        let selector = ProductSelector::Tuple(exact);
        assert!(selector.matches_ref(&exact));
        // A bare product row is a different position than the offer row.
        assert!(!selector.matches_ref(&ProductRef::for_product(product)));
    }
}
