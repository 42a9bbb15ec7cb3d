//! `offersync-catalog` — read-side view of the merchant catalog.
//!
//! The sync pipeline never caches marketplace state: every trigger re-reads
//! the facts it needs through [`CatalogSnapshotProvider`] and recomputes from
//! scratch. This crate defines the fact row shape, the selectors that scope a
//! read, the provider seam, and an in-memory provider for tests and local
//! runs.

pub mod facts;
pub mod in_memory;
pub mod provider;
pub mod selector;

pub use facts::{ArticleFacts, PriceFact, QuantityFact};
pub use in_memory::InMemoryCatalog;
pub use provider::{CatalogError, CatalogSnapshotProvider};
pub use selector::ProductSelector;
