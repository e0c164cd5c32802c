//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::agent::{AgentConfig, DEFAULT_DEVICE};

/// Device and sampling options.
#[derive(Debug, Args)]
pub struct AgentArgs {
    /// UPS name as passed to `upsc`.
    #[arg(value_name = "DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Seconds a sample stays fresh.
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub interval: u64,

    /// Seconds to wait for `upsc` before serving the previous sample.
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub timeout: u64,

    /// Path to the `upsc` binary.
    #[arg(long = "upsc", value_name = "PATH", default_value = "upsc")]
    pub upsc_command: PathBuf,
}

impl AgentArgs {
    /// Build the agent configuration.
    pub fn to_config(&self) -> AgentConfig {
        AgentConfig::new(self.device.as_str())
            .sample_interval(Duration::from_secs(self.interval))
            .adapter_timeout(Duration::from_secs(self.timeout))
            .upsc_command(self.upsc_command.clone())
    }
}

/// Output format for `--dump`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `oid (name) = type: value` line per object.
    #[default]
    Human,
    /// Pretty-printed JSON array.
    Json,
}

/// Diagnostic and logging options.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Sample once, print every managed object, and exit.
    #[arg(long)]
    pub dump: bool,

    /// Format for `--dump`.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl OutputArgs {
    /// Default log directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "upsc_snmp_agent=warn",
            1 => "upsc_snmp_agent=info",
            2 => "upsc_snmp_agent=debug",
            _ => "upsc_snmp_agent=trace",
        }
    }

    /// Install the stderr subscriber. `RUST_LOG` overrides `-v`.
    ///
    /// stdout carries the pass_persist protocol, so nothing else may write
    /// to it.
    pub fn init_tracing(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }
}
