//! Bulk catalog resync.

use std::sync::Arc;

use tracing::info;

use offersync_catalog::{CatalogSnapshotProvider, ProductSelector};
use offersync_events::Dispatcher;
use offersync_marketplace::ProfileRegistry;
use offersync_pricing::PriceComputer;

use crate::fan_out::{FanOut, FanOutReport, HandlerError};

/// Pushes the whole catalog (prices first, then stock) to every active
/// profile. Used after onboarding a connection or to repair drift; day-to-day
/// traffic goes through the trigger handlers.
pub struct CatalogResyncHandler {
    fan_out: FanOut,
}

impl CatalogResyncHandler {
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

    pub async fn resync(&self) -> Result<FanOutReport, HandlerError> {
        info!("starting full catalog resync");
        let prices = self.fan_out.price_for(&ProductSelector::All).await?;
        let stocks = self.fan_out.stock_for(&ProductSelector::All).await?;
        let report = prices.merge(stocks);
        info!(
            dispatched = report.dispatched,
            skipped = report.skipped,
            "catalog resync complete"
        );
        Ok(report)
    }
}
