//! `offersync-handlers` — trigger handlers for the sync pipeline.
//!
//! Each handler turns one domain event into sync tasks: read a catalog
//! snapshot for the event's selector, recompute the absolute target values,
//! fan them out per active marketplace profile onto the dispatcher. Nothing
//! is cached between events; every trigger re-reads the source of truth.

pub mod fan_out;
pub mod price_sync;
pub mod resync;
pub mod stock_sync;

pub use fan_out::{FanOutReport, HandlerError};
pub use price_sync::{ProductChangedHandler, TokenSettingsChangedHandler};
pub use resync::CatalogResyncHandler;
pub use stock_sync::{
    OrderStatusChangedHandler, STOCK_SETTLE_DELAY, StockIncomingHandler, StockRecalculatedHandler,
};
