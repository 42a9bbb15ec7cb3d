//! Packaging dimensions of a sellable position.

use serde::{Deserialize, Serialize};

/// Physical packaging parameters of one catalog position.
///
/// A zero field means "not recorded"; the marketplace requires all four before
/// an offer may be priced or kept on sale.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packaging {
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
    pub weight_g: u32,
}

impl Packaging {
    pub fn new(length_mm: u32, width_mm: u32, height_mm: u32, weight_g: u32) -> Self {
        Self {
            length_mm,
            width_mm,
            height_mm,
            weight_g,
        }
    }

    /// All four parameters recorded and non-zero.
    pub fn is_complete(&self) -> bool {
        self.length_mm > 0 && self.width_mm > 0 && self.height_mm > 0 && self.weight_g > 0
    }

    /// Sum of the three linear dimensions, the input of the delivery
    /// surcharge.
    pub fn dimension_sum_mm(&self) -> u32 {
        self.length_mm + self.width_mm + self.height_mm
    }
}
