//! Shared test utilities for upsc-snmp-agent integration tests.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

mod adapter;
mod fixtures;

pub use adapter::ScriptedAdapter;
pub use fixtures::*;

use std::sync::Arc;

use upsc_snmp_agent::Agent;
use upsc_snmp_agent::cache::SampleCache;
use upsc_snmp_agent::defaults::default_attributes;
use upsc_snmp_agent::handler::ups_mib;

/// Agent for `theups` over `adapter` with the stock defaults and UPS-MIB.
pub fn agent(adapter: ScriptedAdapter) -> Agent<ScriptedAdapter> {
    let cache = SampleCache::new(adapter, DEVICE, Arc::new(default_attributes()));
    Agent::new(cache, ups_mib(DEVICE))
}

/// Run `agent` over `lines` (each terminated with `\n`) and return stdout.
pub async fn converse(agent: &mut Agent<ScriptedAdapter>, lines: &[&str]) -> String {
    let input: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    let mut output = Vec::new();
    agent
        .run(input.as_bytes(), &mut output)
        .await
        .expect("in-memory streams do not fail");
    String::from_utf8(output).expect("replies are UTF-8")
}

/// Expected three-line GET reply.
pub fn reply(oid: &str, type_token: &str, value: &str) -> String {
    format!("{}\n{}\n{}\n", oid, type_token, value)
}
