//! `offersync-marketplace` — delivery of sync tasks to the marketplace.
//!
//! The marketplace's offer service takes one absolute value per call and
//! answers HTTP 200 even for failures, so the interesting part is not the
//! request but the verdict: [`MarketplaceUpdateClient`] classifies every
//! delivery into success, a retryable soft failure re-enqueued through the
//! dispatcher, or a terminal hard failure once the retry ceiling is spent.

pub mod client;
pub mod config;
pub mod gateway;
pub mod profile;
pub mod wire;

pub use client::{MarketplaceUpdateClient, UpdateError, UpdateOutcome};
pub use config::MarketplaceConfig;
pub use gateway::{GatewayError, HttpOfferGateway, OfferGateway};
pub use profile::{InMemoryProfileRegistry, Profile, ProfileRegistry, RegistryError};
pub use wire::OfferReply;
