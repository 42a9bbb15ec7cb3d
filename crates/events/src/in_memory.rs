//! In-memory dispatcher for tests/dev.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::dispatch::{DispatchError, Dispatcher, OutboundTask};

/// In-memory FIFO dispatcher.
///
/// Records envelopes verbatim, including delay and partition key, without
/// simulating the passage of time. Tests drain the queue themselves and assert
/// on the recorded transport instructions.
#[derive(Debug, Default)]
pub struct InMemoryDispatcher {
    queue: Mutex<VecDeque<OutboundTask>>,
}

impl InMemoryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Next envelope in dispatch order.
    pub fn pop(&self) -> Option<OutboundTask> {
        self.queue.lock().unwrap().pop_front()
    }

    /// Everything dispatched so far, clearing the queue.
    pub fn drain(&self) -> Vec<OutboundTask> {
        self.queue.lock().unwrap().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl Dispatcher for InMemoryDispatcher {
    async fn dispatch(&self, task: OutboundTask) -> Result<(), DispatchError> {
        self.queue.lock().unwrap().push_back(task);
        Ok(())
    }
}
