//! Sequential, throttled driver for bulk follow/unfollow runs.
//!
//! One in-flight call at a time, strict input order, a full delay after every
//! call (including the last), and per-account failures recorded instead of
//! aborting the batch.

use std::time::Duration;

use async_trait::async_trait;
use indicatif::ProgressBar;
use tracing::warn;

use crate::github::{Account, FollowClient, FollowError};

/// Injectable pacing between write calls, so tests can run batches without
/// real elapsed time.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Fixed inter-call delay. Follow runs default to 30s and unfollow runs to
/// 5s; GitHub applies stricter limits to write-heavy follow traffic.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(Duration);

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn seconds(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }
}

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Seam between the runner and the HTTP client.
#[async_trait]
pub trait AccountMutator: Send + Sync {
    /// Applies the state change for one account.
    async fn apply(&self, account: &Account) -> Result<(), FollowError>;

    /// Verb for progress labels and failure reports ("follow"/"unfollow").
    fn verb(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Follow,
    Unfollow,
}

impl MutationKind {
    pub fn verb(self) -> &'static str {
        match self {
            MutationKind::Follow => "follow",
            MutationKind::Unfollow => "unfollow",
        }
    }
}

/// [`AccountMutator`] backed by a [`FollowClient`].
pub struct FollowAction<'a> {
    client: &'a FollowClient,
    kind: MutationKind,
}

impl<'a> FollowAction<'a> {
    pub fn new(client: &'a FollowClient, kind: MutationKind) -> Self {
        Self { client, kind }
    }
}

#[async_trait]
impl AccountMutator for FollowAction<'_> {
    async fn apply(&self, account: &Account) -> Result<(), FollowError> {
        match self.kind {
            MutationKind::Follow => self.client.follow(&account.username).await,
            MutationKind::Unfollow => self.client.unfollow(&account.username).await,
        }
    }

    fn verb(&self) -> &'static str {
        self.kind.verb()
    }
}

/// What a batch run did. Failures are collected here so callers can print a
/// summary at the end; the original tool dropped them after logging.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub attempted: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

#[derive(Debug)]
pub struct BatchFailure {
    pub username: String,
    pub reason: String,
}

pub struct BatchRunner<T> {
    throttle: T,
}

impl BatchRunner<FixedDelay> {
    pub fn with_delay_secs(secs: u64) -> Self {
        Self::new(FixedDelay::seconds(secs))
    }
}

impl<T: Throttle> BatchRunner<T> {
    pub fn new(throttle: T) -> Self {
        Self { throttle }
    }

    /// Applies `mutator` to each account in input order, one call at a time.
    /// The throttle pause runs after every call, the last one included, so
    /// back-to-back invocations stay paced. A failed account is logged,
    /// recorded, and skipped past; it never aborts the batch.
    pub async fn run(
        &self,
        accounts: &[Account],
        mutator: &dyn AccountMutator,
        progress: &ProgressBar,
    ) -> BatchReport {
        let mut report = BatchReport {
            attempted: accounts.len(),
            failures: Vec::new(),
        };

        for account in accounts {
            if let Err(err) = mutator.apply(account).await {
                warn!(
                    username = %account.username,
                    action = mutator.verb(),
                    error = %err,
                    "mutation failed, continuing with the rest of the batch"
                );
                report.failures.push(BatchFailure {
                    username: account.username.clone(),
                    reason: err.to_string(),
                });
            }
            progress.inc(1);
            self.throttle.pause().await;
        }

        report
    }
}
