//! `offersync-core` — domain foundation for the marketplace sync pipeline.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the merchant article (SKU), money in integer minor units,
//! packaging dimensions and catalog coordinates.

pub mod article;
pub mod error;
pub mod id;
pub mod money;
pub mod packaging;
pub mod reference;

pub use article::Article;
pub use error::{DomainError, DomainResult};
pub use id::{ModificationUid, OfferUid, OrderUid, ProductUid, ProfileUid, VariationUid};
pub use money::{CurrencyCode, Money};
pub use packaging::Packaging;
pub use reference::ProductRef;
