//! Merchant article (SKU).

use serde::{Deserialize, Serialize};

/// The merchant-side article of one sellable catalog position.
///
/// On the marketplace wire this travels as `offerId`. The type is transparent
/// on purpose: queue payloads may carry anything, and the delivery client is
/// the one that rejects empty articles before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(String);

impl Article {
    pub fn new(article: impl Into<String>) -> Self {
        Self(article.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for Article {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Article {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Article {
    fn from(value: String) -> Self {
        Self(value)
    }
}
