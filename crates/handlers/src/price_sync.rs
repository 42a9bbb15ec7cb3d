//! Price-side trigger handlers.

use std::sync::Arc;

use tracing::debug;

use offersync_catalog::{CatalogSnapshotProvider, ProductSelector};
use offersync_events::{Dispatcher, ProductChanged, TokenSettingsChanged};
use offersync_marketplace::ProfileRegistry;
use offersync_pricing::PriceComputer;

use crate::fan_out::{FanOut, FanOutReport, HandlerError};

/// Reprices every position of one product after its card changed.
pub struct ProductChangedHandler {
    fan_out: FanOut,
}

impl ProductChangedHandler {
    pub fn new(
        catalog: Arc<dyn CatalogSnapshotProvider>,
        registry: Arc<dyn ProfileRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            fan_out: FanOut::new(catalog, registry, dispatcher),
        }
    }

    pub fn with_pricing(mut self, prices: PriceComputer) -> Self {
        self.fan_out.prices = prices;
        self
    }

    pub async fn handle(&self, event: &ProductChanged) -> Result<FanOutReport, HandlerError> {
        debug!(product = %event.product, "product changed; repricing its positions");
        self.fan_out
            .price_for(&ProductSelector::Product(event.product))
            .await
    }
}

/// Reprices the whole catalog when any connection's settings change.
///
/// Settings feed the price formula, so a change on one connection leaves
/// every displayed price suspect; the fan-out still goes to every active
/// profile, not only the changed one.
pub struct TokenSettingsChangedHandler {
    fan_out: FanOut,
}

impl TokenSettingsChangedHandler {
    pub fn new(
        catalog: Arc<dyn CatalogSnapshotProvider>,
        registry: Arc<dyn ProfileRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            fan_out: FanOut::new(catalog, registry, dispatcher),
        }
    }

    pub fn with_pricing(mut self, prices: PriceComputer) -> Self {
        self.fan_out.prices = prices;
        self
    }

    pub async fn handle(&self, event: &TokenSettingsChanged) -> Result<FanOutReport, HandlerError> {
        debug!(profile = %event.profile, "connection settings changed; repricing the catalog");
        self.fan_out.price_for(&ProductSelector::All).await
    }
}
