//! UPS-MIB (RFC 1628) objects backed by NUT attributes.

use crate::attribute::AttributeStore;
use crate::oid;
use crate::oid::Oid;
use crate::rules;
use crate::value::{TypeTag, Value};

use super::MibTable;

/// upsMIB: `.1.3.6.1.2.1.33`.
pub fn ups_mib_root() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 33)
}

/// Reported as upsIdentAgentSoftwareVersion.
pub const AGENT_SOFTWARE_VERSION: &str = "UPSC-SNMP-Agent";

// Resolvers reading one attribute. Non-capturing closures, so they coerce to
// `Resolver` fn pointers.
macro_rules! text {
    ($attr:literal) => {
        |a: &AttributeStore| a.text($attr).map(Value::String)
    };
}

macro_rules! int {
    ($attr:literal) => {
        |a: &AttributeStore| a.integer($attr).map(Value::Integer)
    };
}

macro_rules! tenths {
    ($attr:literal) => {
        |a: &AttributeStore| a.scaled($attr, 10.0).map(Value::Integer)
    };
}

/// Build the UPS-MIB table for `device`.
///
/// The device identifier is published as upsIdentName.
pub fn ups_mib(device: &str) -> MibTable {
    use TypeTag::Integer;

    let root = ups_mib_root();
    let test_no_tests_initiated = root.join(&oid!(1, 7, 7, 1));

    MibTable::builder(root)
        // upsIdent
        .computed(oid!(1, 1, 1, 0), "upsIdentManufacturer", TypeTag::String, text!("device.mfr"))
        .computed(oid!(1, 1, 2, 0), "upsIdentModel", TypeTag::String, text!("device.model"))
        .computed(
            oid!(1, 1, 3, 0),
            "upsIdentUPSSoftwareVersion",
            TypeTag::String,
            text!("driver.version"),
        )
        .literal(oid!(1, 1, 4, 0), "upsIdentAgentSoftwareVersion", AGENT_SOFTWARE_VERSION)
        .literal(oid!(1, 1, 5, 0), "upsIdentName", device)
        .literal(
            oid!(1, 1, 6, 0),
            "upsIdentAttachedDevices",
            "All things connected to this UPS",
        )
        // upsBattery
        .computed(oid!(1, 2, 1, 0), "upsBatteryStatus", Integer, |a| {
            rules::battery_status(a).map(|s| Value::Integer(s.as_i32()))
        })
        .computed(oid!(1, 2, 2, 0), "upsSecondsOnBattery", Integer, int!("battery.runtime"))
        .computed(
            oid!(1, 2, 4, 0),
            "upsEstimatedChargeRemaining",
            Integer,
            int!("battery.charge"),
        )
        .computed(oid!(1, 2, 5, 0), "upsBatteryVoltage", Integer, tenths!("battery.voltage"))
        .computed(oid!(1, 2, 6, 0), "upsBatteryCurrent", Integer, tenths!("battery.current"))
        .computed(
            oid!(1, 2, 7, 0),
            "upsBatteryTemperature",
            Integer,
            int!("battery.temperature"),
        )
        // upsInput
        .literal(oid!(1, 3, 2, 0), "upsInputNumLines", 1)
        .literal(oid!(1, 3, 3, 1, 1, 1), "upsInputLineIndex", 1)
        .computed(oid!(1, 3, 3, 1, 2, 1), "upsInputFrequency", Integer, tenths!("input.frequency"))
        .computed(oid!(1, 3, 3, 1, 3, 1), "upsInputVoltage", Integer, int!("input.voltage"))
        .computed(oid!(1, 3, 3, 1, 4, 1), "upsInputCurrent", Integer, tenths!("input.current"))
        .computed(oid!(1, 3, 3, 1, 5, 1), "upsInputTruePower", Integer, int!("input.realpower"))
        // upsOutput
        .computed(oid!(1, 4, 1, 0), "upsOutputSource", Integer, |a| {
            rules::output_source(a).map(|s| Value::Integer(s.as_i32()))
        })
        .computed(oid!(1, 4, 2, 0), "upsOutputFrequency", Integer, tenths!("output.frequency"))
        .literal(oid!(1, 4, 3, 0), "upsOutputNumLines", 1)
        .literal(oid!(1, 4, 4, 1, 1, 1), "upsOutputLineIndex", 1)
        .computed(oid!(1, 4, 4, 1, 2, 1), "upsOutputVoltage", Integer, int!("output.voltage"))
        .computed(oid!(1, 4, 4, 1, 3, 1), "upsOutputCurrent", Integer, tenths!("output.current"))
        .computed(oid!(1, 4, 4, 1, 4, 1), "upsOutputPower", Integer, int!("output.realpower"))
        .computed(oid!(1, 4, 4, 1, 5, 1), "upsOutputPercentLoad", Integer, int!("ups.load"))
        // upsBypass
        .computed(oid!(1, 5, 1, 0), "upsBypassFrequency", Integer, tenths!("input.frequency"))
        .literal(oid!(1, 5, 2, 0), "upsBypassNumLines", 0)
        // upsAlarm
        .literal(oid!(1, 6, 1, 0), "upsAlarmsPresent", Value::Gauge(0))
        // upsTest
        .literal(
            oid!(1, 7, 1, 0),
            "upsTestId",
            Value::ObjectIdentifier(test_no_tests_initiated),
        )
        .literal(oid!(1, 7, 3, 0), "upsTestResultsSummary", 6) // noTestsInitiated
        // upsControl
        .literal(oid!(1, 8, 1, 0), "upsShutdownType", 1) // output
        .literal(oid!(1, 8, 2, 0), "upsShutdownAfterDelay", -1)
        .literal(oid!(1, 8, 3, 0), "upsStartupAfterDelay", -1)
        .literal(oid!(1, 8, 4, 0), "upsRebootWithDuration", -1)
        .computed(oid!(1, 8, 5, 0), "upsAutoRestart", Integer, |a| {
            rules::auto_restart(a).map(|s| Value::Integer(s.as_i32()))
        })
        // upsConfig
        .computed(
            oid!(1, 9, 1, 0),
            "upsConfigInputVoltage",
            Integer,
            int!("input.voltage.nominal"),
        )
        .computed(
            oid!(1, 9, 2, 0),
            "upsConfigInputFreq",
            Integer,
            tenths!("input.frequency.nominal"),
        )
        .computed(
            oid!(1, 9, 3, 0),
            "upsConfigOutputVoltage",
            Integer,
            int!("output.voltage.nominal"),
        )
        .computed(
            oid!(1, 9, 4, 0),
            "upsConfigOutputFreq",
            Integer,
            tenths!("output.frequency.nominal"),
        )
        .computed(oid!(1, 9, 5, 0), "upsConfigOutputVA", Integer, int!("ups.power.nominal"))
        .computed(
            oid!(1, 9, 6, 0),
            "upsConfigOutputPower",
            Integer,
            int!("ups.realpower.nominal"),
        )
        .computed(oid!(1, 9, 8, 0), "upsConfigAudibleStatus", Integer, |a| {
            rules::beeper_status(a).map(|s| Value::Integer(s.as_i32()))
        })
        .computed(
            oid!(1, 9, 9, 0),
            "upsConfigLowVoltageTransferPoint",
            Integer,
            int!("input.transfer.low"),
        )
        .computed(
            oid!(1, 9, 10, 0),
            "upsConfigHighVoltageTransferPoint",
            Integer,
            int!("input.transfer.high"),
        )
        .build()
}
