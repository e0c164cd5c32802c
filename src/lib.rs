//! # upsc-snmp-agent
//!
//! Net-SNMP `pass_persist` agent exposing a NUT-managed UPS under the
//! standard UPS-MIB subtree (`.1.3.6.1.2.1.33`).
//!
//! snmpd starts the agent once and keeps it alive, forwarding GET requests
//! for the subtree as short line-oriented exchanges on stdin/stdout. Device
//! readings come from the NUT `upsc` command and are cached for a short
//! sample interval, so a burst of requests costs one `upsc` run.
//!
//! ```text
//! snmpd.conf:
//!     pass_persist .1.3.6.1.2.1.33 /usr/local/bin/upsc-snmp-agent theups
//! ```
//!
//! # Layout
//!
//! - [`adapter`] - [`DeviceAdapter`](adapter::DeviceAdapter) and the `upsc` implementation
//! - [`attribute`] - coerced device attributes with default fallback
//! - [`cache`] - time-windowed [`SampleCache`](cache::SampleCache)
//! - [`rules`] - status codes derived from several attributes
//! - [`handler`] - managed objects and the UPS-MIB table
//! - [`agent`] - protocol session and the [`Agent`] driving loop
//!
//! # Example
//!
//! ```rust,no_run
//! use upsc_snmp_agent::{Agent, AgentConfig};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> upsc_snmp_agent::Result<()> {
//! let config = AgentConfig::new("theups").sample_interval(Duration::from_secs(15));
//! let mut agent = Agent::from_config(&config);
//!
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! agent.run(stdin, tokio::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapter;
pub mod agent;
pub mod attribute;
pub mod cache;
pub mod defaults;
pub mod error;
pub mod handler;
pub mod oid;
pub mod prelude;
pub mod rules;
pub mod value;
pub mod varbind;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;

pub use agent::{Agent, AgentConfig};
pub use error::{Error, Result};
pub use oid::Oid;
pub use value::Value;
pub use varbind::VarBind;
