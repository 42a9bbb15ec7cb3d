//! `offersync-events` — messages of the sync pipeline.
//!
//! Inbound **trigger events** tell the pipeline that something changed on the
//! merchant side; outbound **sync tasks** carry the recomputed absolute values
//! toward the marketplace through the [`Dispatcher`] seam. The queue transport
//! itself lives outside this workspace; here are the message shapes, the
//! dispatch contract, the retry policy, and an in-memory dispatcher for tests.

pub mod dispatch;
pub mod in_memory;
pub mod retry;
pub mod task;
pub mod trigger;

pub use dispatch::{DispatchError, Dispatcher, OutboundTask, SYNC_PARTITION};
pub use in_memory::InMemoryDispatcher;
pub use retry::RetryPolicy;
pub use task::{SyncTask, TargetValue};
pub use trigger::{
    OrderStatusChanged, ProductChanged, StockIncoming, StockRecalculated, TokenSettingsChanged,
};
