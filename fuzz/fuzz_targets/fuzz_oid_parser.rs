#![no_main]

use libfuzzer_sys::fuzz_target;

use upsc_snmp_agent::oid::Oid;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(oid) = Oid::parse(s)
    {
        // Display output must parse back to the same OID
        let reparsed = Oid::parse(&oid.to_string());
        assert_eq!(reparsed.ok(), Some(oid));
    }
});
