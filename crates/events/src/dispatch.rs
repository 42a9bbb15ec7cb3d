//! Task dispatch abstraction (mechanics only).
//!
//! The pipeline never talks to a queue directly; it hands [`OutboundTask`]
//! envelopes to a [`Dispatcher`] and moves on. The transport behind the trait
//! is assumed to provide:
//!
//! - **At-least-once delivery**: a task may be delivered more than once;
//!   consumers stay correct because tasks carry absolute values.
//! - **Scheduled delay**: a task with a `delay` must not be delivered before
//!   the delay elapses. Retries lean on this instead of sleeping in-process.
//! - **Partition ordering**: tasks sharing a `partition_key` are delivered in
//!   dispatch order; nothing is guaranteed across partitions.
//!
//! Fresh fan-out traffic shares one partition; retry traffic is partitioned
//! per profile so one connection's failing deliveries cannot stall or reorder
//! another's.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::SyncTask;

/// Partition shared by freshly fanned-out tasks.
pub const SYNC_PARTITION: &str = "marketplace-offers";

/// A task wrapped with its transport instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundTask {
    pub task: SyncTask,
    /// Do not deliver before this much time has passed.
    pub delay: Option<Duration>,
    pub partition_key: String,
}

impl OutboundTask {
    /// Deliver as soon as the transport can, on the shared partition.
    pub fn immediate(task: SyncTask) -> Self {
        Self {
            task,
            delay: None,
            partition_key: SYNC_PARTITION.to_owned(),
        }
    }

    /// Deliver after `delay`, on the shared partition.
    pub fn delayed(task: SyncTask, delay: Duration) -> Self {
        Self {
            task,
            delay: Some(delay),
            partition_key: SYNC_PARTITION.to_owned(),
        }
    }

    /// Same envelope, routed to a dedicated partition.
    pub fn on_partition(mut self, key: impl Into<String>) -> Self {
        self.partition_key = key.into();
        self
    }
}

/// Handoff point between the pipeline and the queue transport.
///
/// `dispatch` returns once the transport has accepted the envelope; it does
/// not wait for delivery. Failures mean the envelope was **not** accepted and
/// the caller decides whether that is fatal.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, task: OutboundTask) -> Result<(), DispatchError>;
}

#[async_trait]
impl<D> Dispatcher for Arc<D>
where
    D: Dispatcher + ?Sized,
{
    async fn dispatch(&self, task: OutboundTask) -> Result<(), DispatchError> {
        (**self).dispatch(task).await
    }
}

/// Dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("dispatch transport unavailable: {0}")]
    Unavailable(String),
}
