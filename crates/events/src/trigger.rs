//! Inbound trigger events.
//!
//! Each trigger carries just enough identity to scope a catalog re-read; no
//! prices, no quantities. The facts are always re-read at handling time, so a
//! stale or duplicated trigger can at worst cause a redundant recomputation of
//! the same absolute values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use offersync_core::{OrderUid, ProductRef, ProductUid, ProfileUid};

/// A product's card changed (price, packaging, offers, anything).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanged {
    pub product: ProductUid,
    pub occurred_at: DateTime<Utc>,
}

impl ProductChanged {
    pub fn new(product: ProductUid) -> Self {
        Self {
            product,
            occurred_at: Utc::now(),
        }
    }
}

/// An order moved to a new status; its reservations may have changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusChanged {
    pub order: OrderUid,
    pub occurred_at: DateTime<Utc>,
}

impl OrderStatusChanged {
    pub fn new(order: OrderUid) -> Self {
        Self {
            order,
            occurred_at: Utc::now(),
        }
    }
}

/// A warehouse receipt arrived; the listed positions gained stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockIncoming {
    pub products: Vec<ProductRef>,
    pub occurred_at: DateTime<Utc>,
}

impl StockIncoming {
    pub fn new(products: Vec<ProductRef>) -> Self {
        Self {
            products,
            occurred_at: Utc::now(),
        }
    }
}

/// Warehouse bookkeeping recounted one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecalculated {
    pub product: ProductRef,
    pub occurred_at: DateTime<Utc>,
}

impl StockRecalculated {
    pub fn new(product: ProductRef) -> Self {
        Self {
            product,
            occurred_at: Utc::now(),
        }
    }
}

/// A marketplace connection's settings changed (commission terms and the
/// like); every displayed price may be affected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettingsChanged {
    pub profile: ProfileUid,
    pub occurred_at: DateTime<Utc>,
}

impl TokenSettingsChanged {
    pub fn new(profile: ProfileUid) -> Self {
        Self {
            profile,
            occurred_at: Utc::now(),
        }
    }
}
