//! Transport seam for the offer service.
//!
//! ## Contract
//!
//! - `save_price` / `save_stock` deliver exactly one article each; batching
//!   is not part of this seam.
//! - Implementations return `Err` only for transport-level trouble (I/O,
//!   timeouts, non-200 statuses). A well-formed reply that *rejects* the
//!   update is still `Ok`; classification belongs to the caller.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use offersync_core::{Article, Money};

use crate::config::MarketplaceConfig;
use crate::wire::{OfferReply, PRICE_SAVE_PATH, PriceSave, STOCK_UPDATE_PATH, StockUpdate};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("offer service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("offer service answered with status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
pub trait OfferGateway: Send + Sync {
    async fn save_price(
        &self,
        token: &str,
        article: &Article,
        price: Money,
    ) -> Result<OfferReply, GatewayError>;

    async fn save_stock(
        &self,
        token: &str,
        article: &Article,
        quantity: u32,
    ) -> Result<OfferReply, GatewayError>;
}

#[async_trait]
impl<G> OfferGateway for std::sync::Arc<G>
where
    G: OfferGateway + ?Sized,
{
    async fn save_price(
        &self,
        token: &str,
        article: &Article,
        price: Money,
    ) -> Result<OfferReply, GatewayError> {
        (**self).save_price(token, article, price).await
    }

    async fn save_stock(
        &self,
        token: &str,
        article: &Article,
        quantity: u32,
    ) -> Result<OfferReply, GatewayError> {
        (**self).save_stock(token, article, quantity).await
    }
}

/// Gateway speaking the merchant-integration HTTP contract.
pub struct HttpOfferGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOfferGateway {
    pub fn new(config: &MarketplaceConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<OfferReply, GatewayError>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl OfferGateway for HttpOfferGateway {
    async fn save_price(
        &self,
        token: &str,
        article: &Article,
        price: Money,
    ) -> Result<OfferReply, GatewayError> {
        let body = PriceSave::new(token, article, price);
        self.post(PRICE_SAVE_PATH, &body).await
    }

    async fn save_stock(
        &self,
        token: &str,
        article: &Article,
        quantity: u32,
    ) -> Result<OfferReply, GatewayError> {
        let body = StockUpdate::new(token, article, quantity);
        self.post(STOCK_UPDATE_PATH, &body).await
    }
}
