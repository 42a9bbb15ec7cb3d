//! Catalog snapshot provider seam.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::facts::ArticleFacts;
use crate::selector::ProductSelector;

/// Read access to the merchant catalog.
///
/// Implementations live outside this workspace (the production one is a SQL
/// projection over the merchant's catalog tables); the pipeline only ever
/// consumes the trait.
///
/// ## Contract
///
/// - A snapshot is a point-in-time read; callers re-read on every trigger and
///   never hold rows across events.
/// - `Order` selectors resolve to the distinct positions referenced by the
///   order's line items; an unknown order yields an empty snapshot, not an
///   error.
/// - Row order is unspecified. Providers should return at most one row per
///   position, but callers de-duplicate by article anyway.
#[async_trait]
pub trait CatalogSnapshotProvider: Send + Sync {
    async fn snapshot(&self, selector: &ProductSelector)
    -> Result<Vec<ArticleFacts>, CatalogError>;
}

#[async_trait]
impl<C> CatalogSnapshotProvider for Arc<C>
where
    C: CatalogSnapshotProvider + ?Sized,
{
    async fn snapshot(
        &self,
        selector: &ProductSelector,
    ) -> Result<Vec<ArticleFacts>, CatalogError> {
        (**self).snapshot(selector).await
    }
}

/// Catalog read failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog storage error: {0}")]
    Storage(String),
}
