//! Scripted device adapter.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use upsc_snmp_agent::adapter::{DeviceAdapter, parse_upsc_output};
use upsc_snmp_agent::attribute::AttributeMap;
use upsc_snmp_agent::error::{AdapterErrorKind, Error, Result};

/// Adapter replaying raw `upsc` output text; `None` entries fail.
///
/// Unlike `MockAdapter`, which hands back ready-made attribute maps, each
/// scripted output goes through [`parse_upsc_output`], so these tests cover
/// the same text-to-attribute path the real `upsc` adapter takes. Malformed
/// text fails the call just as a bad `upsc` run would.
///
/// Once the script is exhausted every call fails. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAdapter {
    script: Arc<Mutex<VecDeque<Option<String>>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw `upsc` output to be parsed on the next call.
    pub fn then_output(self, text: &str) -> Self {
        self.script.lock().unwrap().push_back(Some(text.to_owned()));
        self
    }

    /// Queue one failing call.
    pub fn then_fail(self) -> Self {
        self.script.lock().unwrap().push_back(None);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl DeviceAdapter for ScriptedAdapter {
    async fn sample(&self, device: &str) -> Result<AttributeMap> {
        *self.calls.lock().unwrap() += 1;
        let next = self.script.lock().unwrap().pop_front().flatten();
        match next {
            Some(text) => parse_upsc_output(device, &text),
            None => Err(Error::adapter(device, AdapterErrorKind::ExitStatus(Some(1)))),
        }
    }
}
