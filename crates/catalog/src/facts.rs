//! Catalog facts as read from the merchant's source of truth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use offersync_core::{Article, CurrencyCode, Money, Packaging};

/// Pricing-relevant facts of one sellable position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFact {
    pub article: Article,
    /// Merchant base price before marketplace commission and surcharges.
    pub base_price: Money,
    pub currency: CurrencyCode,
    pub packaging: Packaging,
}

impl PriceFact {
    pub fn new(
        article: Article,
        base_price: Money,
        currency: CurrencyCode,
        packaging: Packaging,
    ) -> Self {
        Self {
            article,
            base_price,
            currency,
            packaging,
        }
    }

    pub fn has_base_price(&self) -> bool {
        self.base_price.is_positive()
    }
}

/// Stock-relevant facts of one sellable position.
///
/// `on_hand` and `reserved` are aggregated sums over warehouses and open
/// orders, so they are signed; the computed purchasable quantity never is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityFact {
    pub article: Article,
    pub on_hand: i64,
    pub reserved: i64,
    /// The merchant keeps the position on sale at all.
    pub active: bool,
    /// Start of the sale window, if bounded.
    pub active_from: Option<DateTime<Utc>>,
    /// End of the sale window, if bounded.
    pub active_to: Option<DateTime<Utc>>,
}

impl QuantityFact {
    /// A position on sale without a bounded window.
    pub fn new(article: Article, on_hand: i64, reserved: i64) -> Self {
        Self {
            article,
            on_hand,
            reserved,
            active: true,
            active_from: None,
            active_to: None,
        }
    }
}

/// One snapshot row: both fact kinds for the same article.
///
/// Stock computation needs the price-presence and packaging flags of the same
/// row, which is why the provider returns the pair rather than either half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleFacts {
    pub price: PriceFact,
    pub quantity: QuantityFact,
}

impl ArticleFacts {
    pub fn new(price: PriceFact, quantity: QuantityFact) -> Self {
        debug_assert_eq!(
            price.article, quantity.article,
            "fact halves must describe the same article"
        );
        Self { price, quantity }
    }

    pub fn article(&self) -> &Article {
        &self.price.article
    }
}
