//! In-memory catalog for tests/dev.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use offersync_core::{OrderUid, ProductRef};

use crate::facts::ArticleFacts;
use crate::provider::{CatalogError, CatalogSnapshotProvider};
use crate::selector::ProductSelector;

/// In-memory snapshot provider.
///
/// Rows are keyed by their catalog coordinate; orders are linked to the
/// coordinates of their line items so `Order` selectors resolve the same way
/// the production projection does.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    rows: RwLock<Vec<(ProductRef, ArticleFacts)>>,
    orders: RwLock<HashMap<OrderUid, Vec<ProductRef>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn insert(&self, reference: ProductRef, facts: ArticleFacts) {
        self.rows.write().unwrap().push((reference, facts));
    }

    /// Link an order to the positions of its line items.
    pub fn link_order(&self, order: OrderUid, references: Vec<ProductRef>) {
        self.orders.write().unwrap().insert(order, references);
    }
}

#[async_trait]
impl CatalogSnapshotProvider for InMemoryCatalog {
    async fn snapshot(
        &self,
        selector: &ProductSelector,
    ) -> Result<Vec<ArticleFacts>, CatalogError> {
        let rows = self.rows.read().unwrap();

        if let ProductSelector::Order(order) = selector {
            let orders = self.orders.read().unwrap();
            let Some(references) = orders.get(order) else {
                return Ok(Vec::new());
            };
            let facts = references
                .iter()
                .flat_map(|wanted| {
                    rows.iter()
                        .filter(move |(reference, _)| reference == wanted)
                        .map(|(_, facts)| facts.clone())
                })
                .collect();
            return Ok(facts);
        }

        let facts = rows
            .iter()
            .filter(|(reference, _)| selector.matches_ref(reference))
            .map(|(_, facts)| facts.clone())
            .collect();
        Ok(facts)
    }
}
