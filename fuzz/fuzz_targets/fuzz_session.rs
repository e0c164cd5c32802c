#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;

use upsc_snmp_agent::agent::{Mode, Response, Session};
use upsc_snmp_agent::attribute::AttributeStore;
use upsc_snmp_agent::defaults::default_attributes;
use upsc_snmp_agent::handler::{SetResult, ups_mib};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let table = ups_mib("fuzz");
    let attrs = AttributeStore::new(Arc::new(default_attributes()));
    let mut session = Session::new();

    for line in text.lines() {
        let awaiting_get_next = session.mode() == &Mode::AwaitGetNextOid;
        let response = session.handle_line(line, &table, &attrs);

        if awaiting_get_next {
            assert_eq!(response, Response::NotFound);
        }
        if let Response::Set(result) = response {
            assert_eq!(result, SetResult::NotWritable);
        }
    }
});
