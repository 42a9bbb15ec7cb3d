//! Offer-service wire types.
//!
//! Bodies follow the marketplace's merchant-integration contract: an empty
//! `meta` object, and a `data` object carrying the authorization token next
//! to a single-element batch. Requests are immutable values assembled in one
//! step.

use serde::{Deserialize, Serialize};

use offersync_core::{Article, Money};

pub const PRICE_SAVE_PATH: &str = "/api/merchantIntegration/v1/offerService/manualPrice/save";
pub const STOCK_UPDATE_PATH: &str = "/api/merchantIntegration/v1/offerService/stock/update";

/// The contract requires the field even though it carries nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {}

#[derive(Debug, Clone, Serialize)]
pub struct PriceSave {
    pub meta: Meta,
    pub data: PriceData,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceData {
    pub token: String,
    pub prices: Vec<PriceEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub offer_id: String,
    pub price: i64,
}

impl PriceSave {
    pub fn new(token: &str, article: &Article, price: Money) -> Self {
        Self {
            meta: Meta {},
            data: PriceData {
                token: token.to_owned(),
                prices: vec![PriceEntry {
                    offer_id: article.to_string(),
                    price: price.minor_units(),
                }],
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StockUpdate {
    pub meta: Meta,
    pub data: StockData,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockData {
    pub token: String,
    pub stocks: Vec<StockEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    pub offer_id: String,
    pub quantity: u32,
}

impl StockUpdate {
    pub fn new(token: &str, article: &Article, quantity: u32) -> Self {
        Self {
            meta: Meta {},
            data: StockData {
                token: token.to_owned(),
                stocks: vec![StockEntry {
                    offer_id: article.to_string(),
                    quantity,
                }],
            },
        }
    }
}

/// Offer-service reply.
///
/// The HTTP status is 200 either way; acceptance is `success == 1` in the
/// body, rejection is an `error` payload, and a body with neither is treated
/// as retryable by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferReply {
    #[serde(default)]
    pub success: Option<i64>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl OfferReply {
    pub fn is_success(&self) -> bool {
        matches!(self.success, Some(1))
    }

    pub fn error_payload(&self) -> Option<&serde_json::Value> {
        self.error.as_ref()
    }
}
