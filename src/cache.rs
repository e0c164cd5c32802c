//! Time-windowed sample cache.
//!
//! The cache calls the device adapter at most once per sample interval. A
//! successful sample replaces the live attributes wholesale and restarts the
//! interval. A failed sample (error or timeout) keeps the previous attributes
//! and leaves the sample time unchanged, so the next check retries at once.
//!
//! Callers should be aware of the consequence: an adapter that keeps failing
//! is invoked on every check, and queries are answered from the last good
//! sample (or the defaults) for as long as it keeps failing.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::adapter::DeviceAdapter;
use crate::attribute::{AttributeMap, AttributeStore};
use crate::error::Error;

/// Default sample interval.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(10);

/// Default bound on a single adapter invocation.
pub const DEFAULT_ADAPTER_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of [`SampleCache::ensure_fresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Current sample is within the interval; adapter not called.
    Fresh,
    /// Adapter called and the sample replaced.
    Refreshed,
    /// Adapter called and failed; previous sample retained.
    Failed,
}

/// Cached device attributes plus the adapter that refreshes them.
#[derive(Debug)]
pub struct SampleCache<A> {
    adapter: A,
    device: String,
    interval: Duration,
    timeout: Duration,
    last_sample: Option<Instant>,
    store: AttributeStore,
}

impl<A: DeviceAdapter> SampleCache<A> {
    /// Create an empty cache; the first check always samples.
    pub fn new(adapter: A, device: impl Into<String>, defaults: Arc<AttributeMap>) -> Self {
        Self {
            adapter,
            device: device.into(),
            interval: DEFAULT_SAMPLE_INTERVAL,
            timeout: DEFAULT_ADAPTER_TIMEOUT,
            last_sample: None,
            store: AttributeStore::new(defaults),
        }
    }

    /// Set the sample interval.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the bound on a single adapter invocation.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a sample is required before answering at `now`.
    pub fn is_stale(&self, now: Instant) -> bool {
        match self.last_sample {
            None => true,
            Some(at) => now.saturating_duration_since(at) > self.interval,
        }
    }

    /// Sample the device if the cached attributes are older than the interval.
    pub async fn ensure_fresh(&mut self, now: Instant) -> Refresh {
        if !self.is_stale(now) {
            tracing::trace!(ups.device = %self.device, "sample cache hit");
            return Refresh::Fresh;
        }

        let result = match tokio::time::timeout(self.timeout, self.adapter.sample(&self.device))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(Error::AdapterTimeout {
                device: self.device.as_str().into(),
                elapsed: self.timeout,
            }),
        };

        match result {
            Ok(sample) => {
                tracing::debug!(
                    ups.device = %self.device,
                    attributes = sample.len(),
                    "sample refreshed"
                );
                self.store.replace(sample);
                self.last_sample = Some(now);
                Refresh::Refreshed
            }
            Err(e) => {
                tracing::warn!(
                    ups.device = %self.device,
                    error = %e,
                    "sampling failed, serving previous sample"
                );
                Refresh::Failed
            }
        }
    }

    /// Current attributes.
    pub fn store(&self) -> &AttributeStore {
        &self.store
    }

    /// Time of the last successful sample.
    pub fn last_sample(&self) -> Option<Instant> {
        self.last_sample
    }

    /// Device identifier passed to the adapter.
    pub fn device(&self) -> &str {
        &self.device
    }

    /// The adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}
