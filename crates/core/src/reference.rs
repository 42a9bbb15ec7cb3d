//! Catalog coordinates.

use serde::{Deserialize, Serialize};

use crate::id::{ModificationUid, OfferUid, ProductUid, VariationUid};

/// The full coordinate of one sellable catalog position.
///
/// Offer, variation and modification are optional: a product without trade
/// offers is addressed by its product id alone, and the lower levels narrow
/// the position down when present. Two references are the same position only
/// when every level matches, including the absent ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub product: ProductUid,
    pub offer: Option<OfferUid>,
    pub variation: Option<VariationUid>,
    pub modification: Option<ModificationUid>,
}

impl ProductRef {
    pub fn new(
        product: ProductUid,
        offer: Option<OfferUid>,
        variation: Option<VariationUid>,
        modification: Option<ModificationUid>,
    ) -> Self {
        Self {
            product,
            offer,
            variation,
            modification,
        }
    }

    /// Reference to a product that has no trade offers.
    pub fn for_product(product: ProductUid) -> Self {
        Self {
            product,
            offer: None,
            variation: None,
            modification: None,
        }
    }
}
