#![no_main]

use libfuzzer_sys::fuzz_target;

use upsc_snmp_agent::adapter::parse_upsc_output;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = parse_upsc_output("fuzz", &text);
});
