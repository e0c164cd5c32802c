//! `--dump` output.
//!
//! Lists every managed object with its current value, in human-readable or
//! JSON form. Intended for checking an snmpd.conf setup by hand.

use std::io::{self, Write};

use serde::Serialize;

use crate::attribute::AttributeStore;
use crate::cli::args::OutputFormat;
use crate::handler::{GetResult, MibTable};
use crate::value::Value;

/// One managed object, ready for output.
#[derive(Debug, Serialize)]
pub struct DumpEntry {
    /// Full OID with a leading dot, as snmpd sees it.
    pub oid: String,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    /// `null` when the object currently answers `NONE`.
    pub value: serde_json::Value,
}

/// Resolve every object of `mib` against `attrs`, in OID order.
pub fn collect_entries(mib: &MibTable, attrs: &AttributeStore) -> Vec<DumpEntry> {
    mib.objects()
        .map(|(suffix, object)| {
            let value = match mib.resolve(suffix, attrs) {
                GetResult::Value(v) => json_value(&v),
                GetResult::NoSuchObject => serde_json::Value::Null,
            };
            DumpEntry {
                oid: format!(".{}", mib.root().join(suffix)),
                name: object.name,
                value_type: object.type_tag.as_str(),
                value,
            }
        })
        .collect()
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(v) => (*v).into(),
        Value::Gauge(v) | Value::Counter(v) | Value::TimeTicks(v) => (*v).into(),
        other => serde_json::Value::String(other.to_string()),
    }
}

/// Write dump entries in `format`.
pub fn write_dump<W: Write>(
    w: &mut W,
    entries: &[DumpEntry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => write_human(w, entries),
        OutputFormat::Json => write_json(w, entries),
    }
}

fn write_human<W: Write>(w: &mut W, entries: &[DumpEntry]) -> io::Result<()> {
    let width = entries.iter().map(|e| e.oid.len()).max().unwrap_or(0);
    for entry in entries {
        write!(w, "{:<width$} {} = ", entry.oid, entry.name)?;
        match &entry.value {
            serde_json::Value::Null => writeln!(w, "NONE")?,
            serde_json::Value::String(s) => writeln!(w, "{}: \"{}\"", entry.value_type, s)?,
            other => writeln!(w, "{}: {}", entry.value_type, other)?,
        }
    }
    Ok(())
}

fn write_json<W: Write>(w: &mut W, entries: &[DumpEntry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    writeln!(w, "{}", json)
}

/// Write an error message to stderr.
pub fn write_error(err: &crate::Error) {
    eprintln!("Error: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeMap;
    use crate::defaults::default_attributes;
    use crate::handler::ups_mib;
    use std::sync::Arc;

    fn entries() -> Vec<DumpEntry> {
        let mut attrs = AttributeStore::new(Arc::new(default_attributes()));
        attrs.replace(AttributeMap::from_raw([("battery.charge", "87")]));
        collect_entries(&ups_mib("theups"), &attrs)
    }

    fn find<'a>(entries: &'a [DumpEntry], name: &str) -> &'a DumpEntry {
        entries.iter().find(|e| e.name == name).unwrap()
    }

    #[test]
    fn test_collect_covers_every_object() {
        let entries = entries();
        assert_eq!(entries.len(), 45);
        assert!(entries.iter().all(|e| e.oid.starts_with(".1.3.6.1.2.1.33.")));

        let charge = find(&entries, "upsEstimatedChargeRemaining");
        assert_eq!(charge.oid, ".1.3.6.1.2.1.33.1.2.4.0");
        assert_eq!(charge.value_type, "integer");
        assert_eq!(charge.value, serde_json::json!(87));

        // no battery.temperature in the defaults
        assert!(find(&entries, "upsBatteryTemperature").value.is_null());
    }

    #[test]
    fn test_human_format() {
        let entries = entries();
        let mut out = Vec::new();
        write_dump(&mut out, &entries, OutputFormat::Human).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 45);
        assert!(text.contains("upsIdentManufacturer = string: \"PowerWalker\""));
        assert!(text.contains("upsEstimatedChargeRemaining = integer: 87"));
        assert!(text.contains("upsBatteryTemperature = NONE"));
    }

    #[test]
    fn test_json_format() {
        let entries = entries();
        let mut out = Vec::new();
        write_dump(&mut out, &entries, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 45);
        let ident = array
            .iter()
            .find(|e| e["name"] == "upsIdentManufacturer")
            .unwrap();
        assert_eq!(ident["oid"], ".1.3.6.1.2.1.33.1.1.1.0");
        assert_eq!(ident["type"], "string");
        assert_eq!(ident["value"], "PowerWalker");
    }
}
