//! Target price computation.

use offersync_catalog::PriceFact;
use offersync_core::Money;

use crate::eligibility::EligibilityGap;

/// Marketplace commission applied when the merchant has not configured one.
pub const DEFAULT_COMMISSION_PERCENT: i64 = 15;

/// Computes the absolute price the marketplace should display.
///
/// The formula, in integer minor units throughout:
///
/// ```text
/// target = base + base * commission / 100 + (length + width + height) * 100 / 2
/// ```
///
/// The commission term uses truncating integer division. The dimensional
/// surcharge multiplies by 100 before halving, so an odd dimension sum keeps
/// its 50-unit half step instead of losing it to truncation.
///
/// This is the only place a target price is ever derived; tasks carry the
/// result as an absolute value and the delivery client transmits it untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PriceComputer {
    commission_percent: i64,
}

impl PriceComputer {
    pub fn new() -> Self {
        Self::with_commission(DEFAULT_COMMISSION_PERCENT)
    }

    pub fn with_commission(commission_percent: i64) -> Self {
        Self { commission_percent }
    }

    pub fn commission_percent(&self) -> i64 {
        self.commission_percent
    }

    /// Absolute target price for an eligible position, or the gap that makes
    /// the position unpriceable. An ineligible position must not produce a
    /// price task at all.
    pub fn target_price(&self, fact: &PriceFact) -> Result<Money, EligibilityGap> {
        if !fact.has_base_price() {
            return Err(EligibilityGap::MissingPrice);
        }
        if !fact.packaging.is_complete() {
            return Err(EligibilityGap::MissingPackaging);
        }

        let base = fact.base_price.minor_units();
        let commission = base * self.commission_percent / 100;
        let surcharge = i64::from(fact.packaging.dimension_sum_mm()) * 100 / 2;
        Ok(Money::from_minor(base + commission + surcharge))
    }
}

impl Default for PriceComputer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offersync_catalog::PriceFact;
    use offersync_core::{Article, CurrencyCode, Money, Packaging};

    fn fact(base_minor: i64, packaging: Packaging) -> PriceFact {
        PriceFact::new(
            Article::new("ART-1"),
            Money::from_minor(base_minor),
            CurrencyCode::new("RUB").unwrap(),
            packaging,
        )
    }

    #[test]
    fn commission_and_surcharge_land_on_the_reference_case() {
        // 10000 + 15% (1500) + (10+10+10)/2 in major units (1500 minor).
        let computer = PriceComputer::new();
        let target = computer
            .target_price(&fact(10000, Packaging::new(10, 10, 10, 500)))
            .unwrap();
        assert_eq!(target, Money::from_minor(13000));
    }

    #[test]
    fn commission_division_truncates() {
        // 10001 * 15 / 100 = 1500 (the .15 is truncated).
        let computer = PriceComputer::new();
        let target = computer
            .target_price(&fact(10001, Packaging::new(10, 10, 10, 500)))
            .unwrap();
        assert_eq!(target, Money::from_minor(13001));
    }

    #[test]
    fn odd_dimension_sum_keeps_the_half_step() {
        // (3+4+4) * 100 / 2 = 550, not (11/2)*100 = 500.
        let computer = PriceComputer::with_commission(0);
        let target = computer
            .target_price(&fact(1000, Packaging::new(3, 4, 4, 100)))
            .unwrap();
        assert_eq!(target, Money::from_minor(1550));
    }

    #[test]
    fn zero_commission_leaves_base_plus_surcharge() {
        let computer = PriceComputer::with_commission(0);
        let target = computer
            .target_price(&fact(10000, Packaging::new(10, 10, 10, 500)))
            .unwrap();
        assert_eq!(target, Money::from_minor(11500));
    }

    #[test]
    fn missing_price_is_a_gap() {
        let computer = PriceComputer::new();
        let gap = computer
            .target_price(&fact(0, Packaging::new(10, 10, 10, 500)))
            .unwrap_err();
        assert_eq!(gap, EligibilityGap::MissingPrice);

        let gap = computer
            .target_price(&fact(-500, Packaging::new(10, 10, 10, 500)))
            .unwrap_err();
        assert_eq!(gap, EligibilityGap::MissingPrice);
    }

    #[test]
    fn incomplete_packaging_is_a_gap() {
        let computer = PriceComputer::new();
        for packaging in [
            Packaging::new(0, 10, 10, 500),
            Packaging::new(10, 0, 10, 500),
            Packaging::new(10, 10, 0, 500),
            Packaging::new(10, 10, 10, 0),
        ] {
            let gap = computer.target_price(&fact(10000, packaging)).unwrap_err();
            assert_eq!(gap, EligibilityGap::MissingPackaging);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: an eligible target never undercuts the merchant base
            /// price (commission and surcharge only ever add).
            #[test]
            fn target_never_undercuts_base(
                base in 1i64..1_000_000_000_000,
                length in 1u32..10_000,
                width in 1u32..10_000,
                height in 1u32..10_000,
                weight in 1u32..1_000_000,
                commission in 0i64..100,
            ) {
                let computer = PriceComputer::with_commission(commission);
                let target = computer
                    .target_price(&fact(base, Packaging::new(length, width, height, weight)))
                    .unwrap();
                prop_assert!(target.minor_units() > base);
            }

            /// Property: the target grows monotonically with the base price.
            #[test]
            fn target_is_monotone_in_base(
                base in 1i64..1_000_000_000_000,
                bump in 1i64..1_000_000,
            ) {
                let computer = PriceComputer::new();
                let packaging = Packaging::new(10, 10, 10, 500);
                let low = computer.target_price(&fact(base, packaging)).unwrap();
                let high = computer.target_price(&fact(base + bump, packaging)).unwrap();
                prop_assert!(high > low);
            }

            /// Property: any zeroed packaging field makes the position
            /// ineligible, whatever the price.
            #[test]
            fn zeroed_packaging_field_blocks_pricing(
                base in 1i64..1_000_000_000_000,
                value in 1u32..10_000,
                zeroed in 0usize..4,
            ) {
                let mut fields = [value; 4];
                fields[zeroed] = 0;
                let packaging = Packaging::new(fields[0], fields[1], fields[2], fields[3]);

                let computer = PriceComputer::new();
                prop_assert_eq!(
                    computer.target_price(&fact(base, packaging)).unwrap_err(),
                    EligibilityGap::MissingPackaging
                );
            }
        }
    }
}
