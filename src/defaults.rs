//! Static default attribute table.
//!
//! Used for any attribute missing from the live sample, including every
//! attribute while no sample has succeeded yet. `battery.temperature` is
//! deliberately absent, so upsBatteryTemperature answers `NONE` unless the
//! device reports it.

use crate::attribute::AttributeMap;

/// Build the default attribute table.
pub fn default_attributes() -> AttributeMap {
    let mut map = AttributeMap::new();
    map.insert("battery.charge", 100);
    map.insert("battery.charge.warning", 25);
    map.insert("battery.current", 0);
    map.insert("battery.runtime", 0);
    map.insert("battery.voltage", 12.0);
    map.insert("battery.voltage.low", 10.4);
    map.insert("device.mfr", "PowerWalker");
    map.insert("device.model", "VI 600 SW");
    map.insert("driver.version", "1.0");
    map.insert("input.current", 0);
    map.insert("input.frequency", 50.0);
    map.insert("input.frequency.nominal", 50.0);
    map.insert("input.realpower", 0);
    map.insert("input.transfer.high", 255);
    map.insert("input.transfer.low", 210);
    map.insert("input.voltage", 230);
    map.insert("input.voltage.nominal", 230);
    map.insert("output.current", 0);
    map.insert("output.frequency", 49.8);
    map.insert("output.frequency.nominal", 50);
    map.insert("output.realpower", 0);
    map.insert("output.voltage", 230);
    map.insert("output.voltage.nominal", 230);
    map.insert("ups.beeper.status", "enabled");
    map.insert("ups.load", 5);
    map.insert("ups.power.nominal", 600);
    map.insert("ups.realpower.nominal", 360);
    map.insert("ups.start.auto", "yes");
    map.insert("ups.status", "OL");
    map
}
