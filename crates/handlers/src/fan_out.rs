//! Shared fan-out plumbing.
//!
//! Every handler funnels through [`FanOut`]: fetch the active profiles once,
//! read the snapshot for the event's selector, then walk rows outer and
//! profiles inner. Duplicate articles within one event's row set are
//! processed once (first row wins), which also bounds eligibility warnings
//! to one per event per article.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use offersync_catalog::{ArticleFacts, CatalogError, CatalogSnapshotProvider, ProductSelector};
use offersync_events::{DispatchError, Dispatcher, OutboundTask, SyncTask};
use offersync_marketplace::{Profile, ProfileRegistry, RegistryError};
use offersync_pricing::{PriceComputer, StockComputer};

/// What one event's fan-out did: `dispatched` counts emitted tasks,
/// `skipped` counts rows that produced none (ineligible or duplicate).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub dispatched: usize,
    pub skipped: usize,
}

impl FanOutReport {
    pub fn merge(self, other: Self) -> Self {
        Self {
            dispatched: self.dispatched + other.dispatched,
            skipped: self.skipped + other.skipped,
        }
    }
}

/// Fan-out failure. All variants abort the event; the transport redelivers
/// the trigger, and absolute targets make the rerun harmless.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("profile lookup failed: {0}")]
    Registry(#[from] RegistryError),
    #[error("catalog snapshot failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("task dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

pub(crate) struct FanOut {
    pub(crate) catalog: Arc<dyn CatalogSnapshotProvider>,
    pub(crate) registry: Arc<dyn ProfileRegistry>,
    pub(crate) dispatcher: Arc<dyn Dispatcher>,
    pub(crate) prices: PriceComputer,
    pub(crate) stocks: StockComputer,
}

impl FanOut {
    pub(crate) fn new(
        catalog: Arc<dyn CatalogSnapshotProvider>,
        registry: Arc<dyn ProfileRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            catalog,
            registry,
            dispatcher,
            prices: PriceComputer::new(),
            stocks: StockComputer::new(),
        }
    }

    pub(crate) async fn price_for(
        &self,
        selector: &ProductSelector,
    ) -> Result<FanOutReport, HandlerError> {
        let Some(profiles) = self.profiles().await? else {
            return Ok(FanOutReport::default());
        };
        let rows = self.catalog.snapshot(selector).await?;

        let mut report = FanOutReport::default();
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.article().clone()) {
                report.skipped += 1;
                continue;
            }
            match self.prices.target_price(&row.price) {
                Ok(target) => {
                    for profile in &profiles {
                        let task = SyncTask::price(profile.id, row.article().clone(), target);
                        self.dispatcher.dispatch(OutboundTask::immediate(task)).await?;
                        report.dispatched += 1;
                    }
                }
                Err(gap) => {
                    warn!(article = %row.article(), gap = %gap, "price row not eligible; no task");
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }

    pub(crate) async fn stock_for(
        &self,
        selector: &ProductSelector,
    ) -> Result<FanOutReport, HandlerError> {
        self.stock_for_many(std::slice::from_ref(selector)).await
    }

    /// Stock fan-out over the union of several selectors' rows, deduplicated
    /// as one row set so a receipt touching the same article twice emits one
    /// task per profile, not two.
    pub(crate) async fn stock_for_many(
        &self,
        selectors: &[ProductSelector],
    ) -> Result<FanOutReport, HandlerError> {
        let Some(profiles) = self.profiles().await? else {
            return Ok(FanOutReport::default());
        };
        let mut rows: Vec<ArticleFacts> = Vec::new();
        for selector in selectors {
            rows.extend(self.catalog.snapshot(selector).await?);
        }
        let now = Utc::now();

        let mut report = FanOutReport::default();
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.article().clone()) {
                report.skipped += 1;
                continue;
            }
            let decision = self.stocks.target_quantity(
                &row.quantity,
                row.price.has_base_price(),
                row.price.packaging.is_complete(),
                now,
            );
            if let Some(gap) = decision.gap {
                // The zero still goes out; a stopped sale must reach the
                // marketplace even when the row cannot be priced.
                warn!(article = %row.article(), gap = %gap, "stock forced to zero");
            }
            for profile in &profiles {
                let task = SyncTask::quantity(profile.id, row.article().clone(), decision.quantity);
                self.dispatcher.dispatch(OutboundTask::immediate(task)).await?;
                report.dispatched += 1;
            }
        }
        Ok(report)
    }

    async fn profiles(&self) -> Result<Option<Vec<Profile>>, HandlerError> {
        let profiles = self.registry.active_profiles().await?;
        if profiles.is_empty() {
            debug!("no active marketplace profiles; nothing to fan out");
            return Ok(None);
        }
        Ok(Some(profiles))
    }
}
