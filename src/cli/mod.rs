//! Command-line support for the `upsc-snmp-agent` binary.
//!
//! Argument parsing, tracing initialisation and the `--dump` diagnostic
//! output.
//!
//! This module is only available with the `cli` feature.

pub mod args;
pub mod output;
