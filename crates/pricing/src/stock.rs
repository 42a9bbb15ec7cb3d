//! Purchasable quantity computation.

use chrono::{DateTime, Utc};

use offersync_catalog::QuantityFact;

use crate::eligibility::EligibilityGap;

/// The quantity to push for one position, plus the gap that forced a zero,
/// if any. Zeros are dispatched like any other value; a forced zero is how
/// sales get stopped on the marketplace side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockDecision {
    pub quantity: u32,
    /// Present when the zero was forced by an eligibility gap. Inactive
    /// positions and closed sale windows zero silently; they are normal
    /// business states, not gaps.
    pub gap: Option<EligibilityGap>,
}

/// Computes the purchasable quantity the marketplace should display.
///
/// Availability is on-hand minus reservations, clamped at zero; the position
/// must be priced, fully packaged, active, and inside its sale window (bounds
/// inclusive, unset bounds pass) to expose anything else.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StockComputer;

impl StockComputer {
    pub fn new() -> Self {
        Self
    }

    pub fn target_quantity(
        &self,
        fact: &QuantityFact,
        price_present: bool,
        packaging_complete: bool,
        now: DateTime<Utc>,
    ) -> StockDecision {
        if !price_present {
            return StockDecision {
                quantity: 0,
                gap: Some(EligibilityGap::MissingPrice),
            };
        }
        if !packaging_complete {
            return StockDecision {
                quantity: 0,
                gap: Some(EligibilityGap::MissingPackaging),
            };
        }

        let on_sale = fact.active
            && !fact.active_from.is_some_and(|from| now < from)
            && !fact.active_to.is_some_and(|to| to < now);
        if !on_sale {
            return StockDecision {
                quantity: 0,
                gap: None,
            };
        }

        let available = fact
            .on_hand
            .saturating_sub(fact.reserved)
            .clamp(0, i64::from(u32::MAX));
        StockDecision {
            quantity: available as u32,
            gap: None,
        }
    }
}
