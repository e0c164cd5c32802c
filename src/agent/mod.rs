//! pass_persist agent.
//!
//! The [`Agent`] owns the three pieces of per-process state: the protocol
//! [`Session`], the [`SampleCache`] and the [`MibHandler`]. It reads one line
//! at a time, brings the cache up to date, lets the session answer, and
//! flushes the answer before reading the next line.
//!
//! # Example
//!
//! ```rust
//! use upsc_snmp_agent::adapter::DeviceAdapter;
//! use upsc_snmp_agent::agent::Agent;
//! use upsc_snmp_agent::attribute::AttributeMap;
//! use upsc_snmp_agent::cache::SampleCache;
//! use upsc_snmp_agent::defaults::default_attributes;
//! use upsc_snmp_agent::handler::ups_mib;
//! use std::sync::Arc;
//!
//! struct Fixed;
//!
//! impl DeviceAdapter for Fixed {
//!     async fn sample(&self, _device: &str) -> upsc_snmp_agent::Result<AttributeMap> {
//!         Ok(AttributeMap::from_raw([("ups.load", "12")]))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> upsc_snmp_agent::Result<()> {
//! let cache = SampleCache::new(Fixed, "theups", Arc::new(default_attributes()));
//! let mut agent = Agent::new(cache, ups_mib("theups"));
//!
//! let input: &[u8] = b"PING\nget\n.1.3.6.1.2.1.33.1.4.4.1.5.1\n";
//! let mut output = Vec::new();
//! agent.run(input, &mut output).await?;
//!
//! assert_eq!(output, b"PONG\n.1.3.6.1.2.1.33.1.4.4.1.5.1\ninteger\n12\n");
//! # Ok(())
//! # }
//! ```

mod response;
mod session;

pub use response::Response;
pub use session::{Mode, Session};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::Instant;

use crate::adapter::{DeviceAdapter, UpscAdapter};
use crate::attribute::AttributeMap;
use crate::cache::{DEFAULT_ADAPTER_TIMEOUT, DEFAULT_SAMPLE_INTERVAL, Refresh, SampleCache};
use crate::defaults::default_attributes;
use crate::error::{Error, Result};
use crate::handler::{MibHandler, MibTable, ups_mib};

/// Device identifier used when none is configured.
pub const DEFAULT_DEVICE: &str = "theups";

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// UPS name as understood by `upsc` (`upsc <device>`).
    pub device: String,
    /// Maximum age of a sample before the next request refreshes it.
    pub sample_interval: Duration,
    /// Bound on a single `upsc` invocation.
    pub adapter_timeout: Duration,
    /// `upsc` binary to run.
    pub upsc_command: PathBuf,
    /// Values for attributes missing from the live sample.
    pub defaults: AttributeMap,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_owned(),
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            adapter_timeout: DEFAULT_ADAPTER_TIMEOUT,
            upsc_command: PathBuf::from("upsc"),
            defaults: default_attributes(),
        }
    }
}

impl AgentConfig {
    /// Default configuration for `device`.
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Default::default()
        }
    }

    /// Set the sample interval.
    pub fn sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Set the adapter timeout.
    pub fn adapter_timeout(mut self, timeout: Duration) -> Self {
        self.adapter_timeout = timeout;
        self
    }

    /// Set the `upsc` binary.
    pub fn upsc_command(mut self, command: impl Into<PathBuf>) -> Self {
        self.upsc_command = command.into();
        self
    }

    /// Replace the default attribute table.
    pub fn defaults(mut self, defaults: AttributeMap) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build the sample cache described by this configuration.
    pub fn build_cache(&self) -> SampleCache<UpscAdapter> {
        SampleCache::new(
            UpscAdapter::new(self.upsc_command.clone()),
            self.device.as_str(),
            Arc::new(self.defaults.clone()),
        )
        .interval(self.sample_interval)
        .timeout(self.adapter_timeout)
    }

    /// Build the UPS-MIB table for the configured device.
    pub fn build_mib(&self) -> MibTable {
        ups_mib(&self.device)
    }
}

/// pass_persist agent over one input stream.
#[derive(Debug)]
pub struct Agent<A, H = MibTable> {
    session: Session,
    cache: SampleCache<A>,
    handler: H,
}

impl Agent<UpscAdapter, MibTable> {
    /// Build an agent running `upsc` and serving the UPS-MIB.
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.build_cache(), config.build_mib())
    }
}

impl<A: DeviceAdapter, H: MibHandler> Agent<A, H> {
    /// Create an agent in the idle state with an empty cache.
    pub fn new(cache: SampleCache<A>, handler: H) -> Self {
        Self {
            session: Session::new(),
            cache,
            handler,
        }
    }

    /// Process one input line received at `now`.
    ///
    /// The cache is checked on every line, whatever the session mode.
    pub async fn handle_line(&mut self, line: &str, now: Instant) -> Response {
        self.refresh(now).await;
        self.session
            .handle_line(line, &self.handler, self.cache.store())
    }

    /// Bring the cache up to date without touching the session.
    pub async fn refresh(&mut self, now: Instant) -> Refresh {
        self.cache.ensure_fresh(now).await
    }

    /// Serve requests from `reader` until it reaches end of input.
    ///
    /// Each reply is written and flushed before the next line is read.
    /// Invalid UTF-8 in a line is replaced rather than treated as an error.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let io_err = |source| Error::Io {
            device: None,
            source,
        };

        tracing::info!(ups.device = %self.cache.device(), "agent started");
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await.map_err(io_err)? == 0 {
                break;
            }
            let now = Instant::now();
            let line = String::from_utf8_lossy(&buf);
            tracing::trace!(line = %line.trim_end(), "request line");

            let response = self.handle_line(&line, now).await;
            if response.is_silent() {
                continue;
            }
            writer
                .write_all(response.to_string().as_bytes())
                .await
                .map_err(io_err)?;
            writer.flush().await.map_err(io_err)?;
        }

        tracing::info!("input closed, agent stopping");
        Ok(())
    }

    /// Protocol session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sample cache.
    pub fn cache(&self) -> &SampleCache<A> {
        &self.cache
    }

    /// MIB handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}
