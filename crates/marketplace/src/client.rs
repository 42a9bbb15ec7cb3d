//! Delivery endpoint for queued sync tasks.
//!
//! One task in, at most one marketplace write out. A delivery runs through
//! fixed stages: validate the task, honor the execute gate, resolve the
//! profile, send, classify the reply. Transient trouble goes back on the
//! queue with a delay and a per-profile partition; a task that exhausts its
//! attempts settles as [`UpdateOutcome::Failed`] with one error log, never as
//! an `Err`.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use offersync_events::{DispatchError, Dispatcher, OutboundTask, SyncTask, TargetValue};

use crate::config::MarketplaceConfig;
use crate::gateway::{GatewayError, OfferGateway};
use crate::profile::{ProfileRegistry, RegistryError};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("invalid task: {0}")]
    Validation(String),
    #[error(transparent)]
    Transport(#[from] GatewayError),
    #[error("offer service rejected the update: {0}")]
    Business(String),
    #[error("offer service reply carried neither success nor error")]
    Indeterminate,
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Requeue(#[from] DispatchError),
}

impl UpdateError {
    /// Whether another delivery of the same task could plausibly settle it.
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Business(_) | Self::Indeterminate | Self::Registry(_) => {
                true
            }
            Self::Validation(_) | Self::Requeue(_) => false,
        }
    }
}

/// How a single delivery settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The task is done: accepted by the marketplace, skipped by the execute
    /// gate, or dropped for a dead profile.
    Success,
    /// Handed back to the queue; `attempt` is the delivery the task will make
    /// next.
    Requeued { attempt: u32, delay: Duration },
    /// Attempts exhausted; the task is abandoned.
    Failed { error: String },
}

/// Consumes [`SyncTask`]s and writes their values to the marketplace.
pub struct MarketplaceUpdateClient<G, R, D> {
    gateway: G,
    registry: R,
    dispatcher: D,
    config: MarketplaceConfig,
}

impl<G, R, D> MarketplaceUpdateClient<G, R, D>
where
    G: OfferGateway,
    R: ProfileRegistry,
    D: Dispatcher,
{
    pub fn new(gateway: G, registry: R, dispatcher: D, config: MarketplaceConfig) -> Self {
        Self {
            gateway,
            registry,
            dispatcher,
            config,
        }
    }

    /// Delivers one task.
    ///
    /// `Err` means the task itself is malformed or the requeue handoff
    /// failed; every marketplace-side result, including exhaustion, comes
    /// back as an [`UpdateOutcome`].
    pub async fn update(&self, task: SyncTask) -> Result<UpdateOutcome, UpdateError> {
        self.validate(&task)?;

        if !self.config.execute {
            debug!(
                article = %task.article,
                kind = task.kind(),
                "execute flag off; skipping marketplace write"
            );
            return Ok(UpdateOutcome::Success);
        }

        match self.deliver(&task).await {
            Ok(outcome) => Ok(outcome),
            Err(error) if error.is_retryable() => self.requeue(task, error).await,
            Err(error) => Err(error),
        }
    }

    fn validate(&self, task: &SyncTask) -> Result<(), UpdateError> {
        if task.article.is_empty() {
            error!(profile = %task.profile, "rejecting task with an empty article");
            return Err(UpdateError::Validation("article is empty".into()));
        }
        if let TargetValue::Price(price) = task.target {
            if !price.is_positive() {
                error!(
                    article = %task.article,
                    target = %price,
                    "rejecting non-positive target price"
                );
                return Err(UpdateError::Validation(format!(
                    "target price must be positive, got {price}"
                )));
            }
        }
        Ok(())
    }

    async fn deliver(&self, task: &SyncTask) -> Result<UpdateOutcome, UpdateError> {
        let profile = match self.registry.authorization(task.profile).await? {
            Some(profile) if profile.active => profile,
            found => {
                // The profile was removed or switched off after fan-out;
                // there is nowhere to write to and nothing to retry.
                warn!(
                    article = %task.article,
                    profile = %task.profile,
                    known = found.is_some(),
                    "dropping task for an unknown or deactivated profile"
                );
                return Ok(UpdateOutcome::Success);
            }
        };

        let reply = match task.target {
            TargetValue::Price(price) => {
                self.gateway
                    .save_price(&profile.token, &task.article, price)
                    .await?
            }
            TargetValue::Quantity(quantity) => {
                self.gateway
                    .save_stock(&profile.token, &task.article, quantity)
                    .await?
            }
        };

        if reply.is_success() {
            info!(
                article = %task.article,
                profile = %task.profile,
                kind = task.kind(),
                target = %task.target,
                "offer update accepted"
            );
            return Ok(UpdateOutcome::Success);
        }
        if let Some(payload) = reply.error_payload() {
            return Err(UpdateError::Business(payload.to_string()));
        }
        Err(UpdateError::Indeterminate)
    }

    async fn requeue(
        &self,
        task: SyncTask,
        error: UpdateError,
    ) -> Result<UpdateOutcome, UpdateError> {
        let next = task.attempt + 1;
        if !self.config.retry.should_retry(next) {
            error!(
                article = %task.article,
                profile = %task.profile,
                attempts = self.config.retry.max_attempts,
                error = %error,
                "giving up on offer update"
            );
            return Ok(UpdateOutcome::Failed {
                error: error.to_string(),
            });
        }

        let delay = self.config.retry.delay_for_attempt(next);
        warn!(
            article = %task.article,
            profile = %task.profile,
            attempt = next,
            delay_secs = delay.as_secs(),
            error = %error,
            "offer update failed; requeueing"
        );
        let envelope =
            OutboundTask::delayed(task.next_attempt(), delay).on_partition(task.profile.to_string());
        self.dispatcher.dispatch(envelope).await?;
        Ok(UpdateOutcome::Requeued {
            attempt: next,
            delay,
        })
    }
}
