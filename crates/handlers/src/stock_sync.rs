//! Stock-side trigger handlers.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use offersync_catalog::{CatalogSnapshotProvider, ProductSelector};
use offersync_events::{Dispatcher, OrderStatusChanged, StockIncoming, StockRecalculated};
use offersync_marketplace::ProfileRegistry;

use crate::fan_out::{FanOut, FanOutReport, HandlerError};

/// Wait applied by the physical-movement handlers before reading the
/// snapshot, so source-side bookkeeping (receipt postings, recount ledgers)
/// settles first.
pub const STOCK_SETTLE_DELAY: Duration = Duration::from_secs(3);

/// Resyncs the stock of an order's line items after a status change.
///
/// Any status transition may move reservations; the snapshot read here
/// already reflects them, so no delay is needed.
pub struct OrderStatusChangedHandler {
    fan_out: FanOut,
}

impl OrderStatusChangedHandler {
    pub fn new(
        catalog: Arc<dyn CatalogSnapshotProvider>,
        registry: Arc<dyn ProfileRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            fan_out: FanOut::new(catalog, registry, dispatcher),
        }
    }

    pub async fn handle(&self, event: &OrderStatusChanged) -> Result<FanOutReport, HandlerError> {
        debug!(order = %event.order, "order status changed; resyncing its positions");
        self.fan_out
            .stock_for(&ProductSelector::Order(event.order))
            .await
    }
}

/// Resyncs the positions listed on a warehouse receipt.
pub struct StockIncomingHandler {
    fan_out: FanOut,
    settle: Duration,
}

impl StockIncomingHandler {
    pub fn new(
        catalog: Arc<dyn CatalogSnapshotProvider>,
        registry: Arc<dyn ProfileRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            fan_out: FanOut::new(catalog, registry, dispatcher),
            settle: STOCK_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub async fn handle(&self, event: &StockIncoming) -> Result<FanOutReport, HandlerError> {
        debug!(lines = event.products.len(), "stock receipt; resyncing its positions");
        tokio::time::sleep(self.settle).await;
        let selectors: Vec<ProductSelector> = event
            .products
            .iter()
            .copied()
            .map(ProductSelector::Tuple)
            .collect();
        self.fan_out.stock_for_many(&selectors).await
    }
}

/// Resyncs one position after a warehouse recount.
pub struct StockRecalculatedHandler {
    fan_out: FanOut,
    settle: Duration,
}

impl StockRecalculatedHandler {
    pub fn new(
        catalog: Arc<dyn CatalogSnapshotProvider>,
        registry: Arc<dyn ProfileRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            fan_out: FanOut::new(catalog, registry, dispatcher),
            settle: STOCK_SETTLE_DELAY,
        }
    }

    pub fn with_settle_delay(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub async fn handle(&self, event: &StockRecalculated) -> Result<FanOutReport, HandlerError> {
        debug!(reference = ?event.product, "stock recalculated; resyncing the position");
        tokio::time::sleep(self.settle).await;
        self.fan_out
            .stock_for(&ProductSelector::Tuple(event.product))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use offersync_catalog::{ArticleFacts, InMemoryCatalog, PriceFact, QuantityFact};
    use offersync_core::{
        Article, CurrencyCode, Money, OrderUid, Packaging, ProductRef, ProductUid, ProfileUid,
    };
    use offersync_events::{InMemoryDispatcher, SYNC_PARTITION, TargetValue};
    use offersync_marketplace::{InMemoryProfileRegistry, Profile};

    fn row(article: &str, on_hand: i64, reserved: i64) -> ArticleFacts {
        let article = Article::new(article);
        ArticleFacts::new(
            PriceFact::new(
                article.clone(),
                Money::from_minor(10000),
                CurrencyCode::new("RUB").unwrap(),
                Packaging::new(10, 10, 10, 500),
            ),
            QuantityFact::new(article, on_hand, reserved),
        )
    }

    fn quantities(dispatcher: &InMemoryDispatcher) -> Vec<u32> {
        let mut quantities: Vec<u32> = dispatcher
            .drain()
            .into_iter()
            .map(|envelope| match envelope.task.target {
                TargetValue::Quantity(quantity) => quantity,
                TargetValue::Price(_) => panic!("stock fan-out emitted a price task"),
            })
            .collect();
        quantities.sort_unstable();
        quantities
    }

    #[tokio::test]
    async fn order_change_resyncs_its_line_items() {
        let catalog = InMemoryCatalog::arc();
        let registry = InMemoryProfileRegistry::arc();
        let dispatcher = InMemoryDispatcher::arc();

        let first = ProductRef::for_product(ProductUid::new());
        let second = ProductRef::for_product(ProductUid::new());
        catalog.insert(first, row("ART-1", 5, 8));
        catalog.insert(second, row("ART-2", 10, 4));
        let order = OrderUid::new();
        catalog.link_order(order, vec![first, second]);
        registry.insert(Profile::new(ProfileUid::new(), "token-a", 1));

        let handler =
            OrderStatusChangedHandler::new(catalog.clone(), registry.clone(), dispatcher.clone());
        let report = handler
            .handle(&OrderStatusChanged::new(order))
            .await
            .unwrap();

        assert_eq!(report, FanOutReport { dispatched: 2, skipped: 0 });
        // Over-reservation clamps to zero instead of going negative.
        assert_eq!(quantities(&dispatcher), vec![0, 6]);
    }

    #[tokio::test]
    async fn receipt_lines_for_the_same_article_emit_one_task() {
        let catalog = InMemoryCatalog::arc();
        let registry = InMemoryProfileRegistry::arc();
        let dispatcher = InMemoryDispatcher::arc();

        let product = ProductUid::new();
        let first = ProductRef::for_product(product);
        catalog.insert(first, row("ART-1", 10, 0));
        registry.insert(Profile::new(ProfileUid::new(), "token-a", 1));

        let handler =
            StockIncomingHandler::new(catalog.clone(), registry.clone(), dispatcher.clone())
                .with_settle_delay(Duration::ZERO);
        let report = handler
            .handle(&StockIncoming::new(vec![first, first]))
            .await
            .unwrap();

        assert_eq!(report, FanOutReport { dispatched: 1, skipped: 1 });
        assert_eq!(quantities(&dispatcher), vec![10]);
    }

    #[tokio::test]
    async fn recount_pushes_the_new_quantity() {
        let catalog = InMemoryCatalog::arc();
        let registry = InMemoryProfileRegistry::arc();
        let dispatcher = InMemoryDispatcher::arc();

        let reference = ProductRef::for_product(ProductUid::new());
        catalog.insert(reference, row("ART-1", 7, 2));
        registry.insert(Profile::new(ProfileUid::new(), "token-a", 1));

        let handler =
            StockRecalculatedHandler::new(catalog.clone(), registry.clone(), dispatcher.clone())
                .with_settle_delay(Duration::ZERO);
        let report = handler
            .handle(&StockRecalculated::new(reference))
            .await
            .unwrap();

        assert_eq!(report, FanOutReport { dispatched: 1, skipped: 0 });
        let queued = dispatcher.drain();
        assert_eq!(queued[0].task.target, TargetValue::Quantity(5));
        assert_eq!(queued[0].delay, None);
        assert_eq!(queued[0].partition_key, SYNC_PARTITION);
    }

    #[tokio::test]
    async fn unpriced_row_still_stops_sales() {
        let catalog = InMemoryCatalog::arc();
        let registry = InMemoryProfileRegistry::arc();
        let dispatcher = InMemoryDispatcher::arc();

        let reference = ProductRef::for_product(ProductUid::new());
        let mut unpriced = row("ART-1", 10, 0);
        unpriced.price.base_price = Money::ZERO;
        catalog.insert(reference, unpriced);
        registry.insert(Profile::new(ProfileUid::new(), "token-a", 1));

        let handler =
            StockRecalculatedHandler::new(catalog.clone(), registry.clone(), dispatcher.clone())
                .with_settle_delay(Duration::ZERO);
        let report = handler
            .handle(&StockRecalculated::new(reference))
            .await
            .unwrap();

        // The forced zero is dispatched, not skipped.
        assert_eq!(report, FanOutReport { dispatched: 1, skipped: 0 });
        assert_eq!(quantities(&dispatcher), vec![0]);
    }

    #[tokio::test]
    async fn waits_out_the_settle_delay() {
        let catalog = InMemoryCatalog::arc();
        let registry = InMemoryProfileRegistry::arc();
        let dispatcher = InMemoryDispatcher::arc();

        let reference = ProductRef::for_product(ProductUid::new());
        catalog.insert(reference, row("ART-1", 3, 0));
        registry.insert(Profile::new(ProfileUid::new(), "token-a", 1));

        let handler =
            StockRecalculatedHandler::new(catalog.clone(), registry.clone(), dispatcher.clone())
                .with_settle_delay(Duration::from_millis(50));

        let started = std::time::Instant::now();
        handler
            .handle(&StockRecalculated::new(reference))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(dispatcher.len(), 1);
    }
}
