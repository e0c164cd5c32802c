//! Scripted adapter for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::attribute::AttributeMap;
use crate::error::{AdapterErrorKind, Error, Result};

use super::DeviceAdapter;

#[derive(Debug, Default)]
struct MockState {
    /// Scripted outcomes; `None` is a failure.
    queue: VecDeque<Option<AttributeMap>>,
    /// Outcome once the queue is drained; `None` is a failure.
    fallback: Option<AttributeMap>,
    delay: Option<Duration>,
    calls: usize,
    devices: Vec<String>,
}

/// Adapter returning scripted samples and counting invocations.
///
/// Clones share state, so a test can keep a handle after moving the adapter
/// into a cache.
#[derive(Debug, Clone, Default)]
pub struct MockAdapter {
    state: Arc<Mutex<MockState>>,
}

impl MockAdapter {
    /// Create an adapter that fails until samples are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter that always returns `sample`.
    pub fn always(sample: AttributeMap) -> Self {
        let mock = Self::new();
        mock.state.lock().unwrap().fallback = Some(sample);
        mock
    }

    /// Queue one successful sample.
    pub fn queue_sample(&self, sample: AttributeMap) {
        self.state.lock().unwrap().queue.push_back(Some(sample));
    }

    /// Queue one failure.
    pub fn queue_failure(&self) {
        self.state.lock().unwrap().queue.push_back(None);
    }

    /// Delay every response (for timeout tests).
    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    /// Number of `sample` calls so far.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    /// Devices requested, in call order.
    pub fn devices(&self) -> Vec<String> {
        self.state.lock().unwrap().devices.clone()
    }
}

impl DeviceAdapter for MockAdapter {
    fn sample(
        &self,
        device: &str,
    ) -> impl std::future::Future<Output = Result<AttributeMap>> + Send {
        let (outcome, delay) = {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            state.devices.push(device.to_owned());
            let outcome = match state.queue.pop_front() {
                Some(scripted) => scripted,
                None => state.fallback.clone(),
            };
            (outcome, state.delay)
        };
        let device = device.to_owned();

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            outcome.ok_or_else(|| Error::adapter(device, AdapterErrorKind::ExitStatus(Some(1))))
        }
    }
}
