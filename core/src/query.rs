//! # Query Policy
//!
//! Request/response resources with a loading state, a stale-time cache and bounded retries.
//! Every remote read in the workspace (tours, excursions, weather) goes through [`Query`].

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tourbook_common::config::QueryPolicy;
use tourbook_common::error::GatewayError;
use tracing::{debug, warn};

const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Idle
    }
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Exponential backoff between attempts: 1s, 2s, 4s, ... capped at 30s.
pub fn retry_delay(attempt: u32) -> Duration {
    let secs: u64 = 1u64.checked_shl(attempt.min(16)).unwrap_or(u64::MAX);
    Duration::from_secs(secs).min(MAX_RETRY_DELAY)
}

/// Runs `op`, retrying up to `policy.retry` more times; the last error is returned.
pub async fn fetch_with_retry<T, F, Fut>(
    policy: &QueryPolicy,
    label: &str,
    mut op: F,
) -> Result<T, GatewayError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GatewayError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < policy.retry => {
                let delay: Duration = retry_delay(attempt);
                warn!("{label}: attempt {} failed ({err}), retrying in {}s", attempt + 1, delay.as_secs());
                attempt += 1;
                sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// One cached remote resource.
#[derive(Debug, Clone)]
pub struct Query<T> {
    label: String,
    policy: QueryPolicy,
    state: Resource<T>,
    fetched_at: Option<Instant>,
    last_error: Option<String>,
}

impl<T: Clone> Query<T> {
    pub fn new(label: impl Into<String>, policy: QueryPolicy) -> Self {
        Self {
            label: label.into(),
            policy,
            state: Resource::Idle,
            fetched_at: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &Resource<T> {
        &self.state
    }

    /// The most recent fetch failure, kept even while older data is still served.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Ready data older than the stale time, or no data at all.
    pub fn is_stale(&self) -> bool {
        match (&self.state, self.fetched_at) {
            (Resource::Ready(_), Some(at)) => at.elapsed() >= self.policy.stale_time,
            _ => true,
        }
    }

    /// Serves fresh cached data, otherwise fetches with retries.
    pub async fn fetch<F, Fut>(&mut self, op: F) -> &Resource<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GatewayError>>,
    {
        if !self.is_stale() {
            debug!("{}: served from cache", self.label);
            return &self.state;
        }
        self.refetch(op).await
    }

    /// Fetches regardless of the cache.
    ///
    /// A failed refresh keeps previously loaded data; it stays stale so the next
    /// fetch tries again.
    pub async fn refetch<F, Fut>(&mut self, op: F) -> &Resource<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GatewayError>>,
    {
        if self.state.data().is_none() {
            self.state = Resource::Loading;
        }
        match fetch_with_retry(&self.policy, &self.label, op).await {
            Ok(data) => {
                self.state = Resource::Ready(data);
                self.fetched_at = Some(Instant::now());
                self.last_error = None;
            }
            Err(err) => {
                let message: String = err.to_string();
                if self.state.data().is_some() {
                    warn!("{}: refresh failed, keeping cached data ({message})", self.label);
                } else {
                    warn!("{}: {message}", self.label);
                    self.state = Resource::Failed(message.clone());
                    self.fetched_at = None;
                }
                self.last_error = Some(message);
            }
        }
        &self.state
    }

    /// Window focus: refetch stale data only when the policy asks for it.
    pub async fn on_focus<F, Fut>(&mut self, op: F) -> &Resource<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GatewayError>>,
    {
        if self.policy.refetch_on_focus && self.is_stale() {
            return self.refetch(op).await;
        }
        &self.state
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
