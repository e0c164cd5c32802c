//! Status codes derived from device attributes.
//!
//! Each rule is evaluated only when its managed object is queried. Branches
//! are tried in order and the first match wins. A failed attribute lookup
//! fails the rule; callers turn that into `NONE`.

use crate::attribute::AttributeStore;
use crate::error::Result;

/// upsBatteryStatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Unknown,
    Normal,
    Low,
    Depleted,
}

impl BatteryStatus {
    /// UPS-MIB enumeration value.
    pub const fn as_i32(self) -> i32 {
        match self {
            BatteryStatus::Unknown => 1,
            BatteryStatus::Normal => 2,
            BatteryStatus::Low => 3,
            BatteryStatus::Depleted => 4,
        }
    }
}

/// upsConfigAudibleStatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeeperStatus {
    Disabled,
    Enabled,
    Muted,
}

impl BeeperStatus {
    /// UPS-MIB enumeration value.
    pub const fn as_i32(self) -> i32 {
        match self {
            BeeperStatus::Disabled => 1,
            BeeperStatus::Enabled => 2,
            BeeperStatus::Muted => 3,
        }
    }
}

/// upsOutputSource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    Other,
    None,
    Normal,
    Bypass,
    Battery,
    Booster,
    Reducer,
}

impl OutputSource {
    /// UPS-MIB enumeration value.
    pub const fn as_i32(self) -> i32 {
        match self {
            OutputSource::Other => 1,
            OutputSource::None => 2,
            OutputSource::Normal => 3,
            OutputSource::Bypass => 4,
            OutputSource::Battery => 5,
            OutputSource::Booster => 6,
            OutputSource::Reducer => 7,
        }
    }
}

/// upsAutoRestart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoRestart {
    On,
    Off,
}

impl AutoRestart {
    /// UPS-MIB enumeration value.
    pub const fn as_i32(self) -> i32 {
        match self {
            AutoRestart::On => 1,
            AutoRestart::Off => 2,
        }
    }
}

/// Battery status from voltage, UPS status and charge level.
pub fn battery_status(attrs: &AttributeStore) -> Result<BatteryStatus> {
    if attrs.number("battery.voltage")? < attrs.number("battery.voltage.low")? {
        return Ok(BatteryStatus::Depleted);
    }
    if attrs.is("ups.status", "OB LB")? {
        return Ok(BatteryStatus::Depleted);
    }
    if attrs.number("battery.charge")? < attrs.number("battery.charge.warning")? {
        return Ok(BatteryStatus::Low);
    }
    Ok(BatteryStatus::Normal)
}

/// Beeper status from `ups.beeper.status`.
pub fn beeper_status(attrs: &AttributeStore) -> Result<BeeperStatus> {
    if attrs.is("ups.beeper.status", "enabled")? {
        Ok(BeeperStatus::Enabled)
    } else if attrs.is("ups.beeper.status", "muted")? {
        Ok(BeeperStatus::Muted)
    } else {
        Ok(BeeperStatus::Disabled)
    }
}

/// Output source from `ups.status`.
///
/// Only the exact NUT flag sets `OL`, `OB` and `OB LB` are recognised.
pub fn output_source(attrs: &AttributeStore) -> Result<OutputSource> {
    if attrs.is("ups.status", "OL")? {
        Ok(OutputSource::Normal)
    } else if attrs.is("ups.status", "OB")? || attrs.is("ups.status", "OB LB")? {
        Ok(OutputSource::Battery)
    } else {
        Ok(OutputSource::Other)
    }
}

/// Auto-restart policy from `ups.start.auto`.
pub fn auto_restart(attrs: &AttributeStore) -> Result<AutoRestart> {
    if attrs.is("ups.start.auto", "yes")? {
        Ok(AutoRestart::On)
    } else {
        Ok(AutoRestart::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeMap;
    use crate::defaults::default_attributes;
    use crate::error::Error;
    use std::sync::Arc;

    fn with_defaults(live: &[(&str, &str)]) -> AttributeStore {
        let mut store = AttributeStore::new(Arc::new(default_attributes()));
        store.replace(AttributeMap::from_raw(live.iter().copied()));
        store
    }

    fn bare(live: &[(&str, &str)]) -> AttributeStore {
        let mut store = AttributeStore::new(Arc::new(AttributeMap::new()));
        store.replace(AttributeMap::from_raw(live.iter().copied()));
        store
    }

    #[test]
    fn test_battery_depleted_on_low_voltage() {
        let attrs = bare(&[("battery.voltage", "9.0"), ("battery.voltage.low", "10.4")]);
        assert_eq!(battery_status(&attrs).unwrap(), BatteryStatus::Depleted);
    }

    #[test]
    fn test_battery_depleted_on_low_battery_flag() {
        let attrs = with_defaults(&[("ups.status", "OB LB"), ("battery.charge", "90")]);
        assert_eq!(battery_status(&attrs).unwrap(), BatteryStatus::Depleted);
    }

    #[test]
    fn test_battery_low_on_charge_warning() {
        let attrs = bare(&[
            ("battery.voltage", "12"),
            ("battery.voltage.low", "10.4"),
            ("ups.status", "OL"),
            ("battery.charge", "20"),
            ("battery.charge.warning", "25"),
        ]);
        assert_eq!(battery_status(&attrs).unwrap(), BatteryStatus::Low);
    }

    #[test]
    fn test_battery_normal() {
        let attrs = with_defaults(&[
            ("battery.charge", "100"),
            ("battery.charge.warning", "25"),
            ("ups.status", "OL"),
        ]);
        assert_eq!(battery_status(&attrs).unwrap(), BatteryStatus::Normal);
        assert_eq!(BatteryStatus::Normal.as_i32(), 2);
    }

    #[test]
    fn test_battery_voltage_checked_before_missing_status() {
        // first branch matches, later attributes are never looked up
        let attrs = bare(&[("battery.voltage", "9.0"), ("battery.voltage.low", "10.4")]);
        assert!(attrs.lookup("ups.status").is_err());
        assert_eq!(battery_status(&attrs).unwrap(), BatteryStatus::Depleted);
    }

    #[test]
    fn test_battery_missing_attribute_fails() {
        let attrs = bare(&[("battery.voltage", "12.0"), ("battery.voltage.low", "10.4")]);
        assert!(matches!(
            battery_status(&attrs),
            Err(Error::NoSuchAttribute { name }) if &*name == "ups.status"
        ));
    }

    #[test]
    fn test_battery_text_voltage_fails() {
        let attrs = with_defaults(&[("battery.voltage", "n/a")]);
        assert!(matches!(
            battery_status(&attrs),
            Err(Error::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_beeper_status() {
        let cases = [
            ("enabled", BeeperStatus::Enabled),
            ("muted", BeeperStatus::Muted),
            ("disabled", BeeperStatus::Disabled),
            ("Enabled", BeeperStatus::Disabled),
        ];
        for (raw, expected) in cases {
            let attrs = bare(&[("ups.beeper.status", raw)]);
            assert_eq!(beeper_status(&attrs).unwrap(), expected, "{}", raw);
        }
        assert!(beeper_status(&bare(&[])).is_err());
        assert_eq!(BeeperStatus::Muted.as_i32(), 3);
    }

    #[test]
    fn test_output_source() {
        let cases = [
            ("OL", OutputSource::Normal),
            ("OB", OutputSource::Battery),
            ("OB LB", OutputSource::Battery),
            ("OL CHRG", OutputSource::Other),
            ("BYPASS", OutputSource::Other),
        ];
        for (raw, expected) in cases {
            let attrs = bare(&[("ups.status", raw)]);
            assert_eq!(output_source(&attrs).unwrap(), expected, "{}", raw);
        }
        assert_eq!(OutputSource::Battery.as_i32(), 5);
        assert_eq!(OutputSource::Other.as_i32(), 1);
    }

    #[test]
    fn test_auto_restart() {
        assert_eq!(
            auto_restart(&bare(&[("ups.start.auto", "yes")])).unwrap(),
            AutoRestart::On
        );
        assert_eq!(
            auto_restart(&bare(&[("ups.start.auto", "no")])).unwrap(),
            AutoRestart::Off
        );
        assert!(auto_restart(&bare(&[])).is_err());
        assert_eq!(AutoRestart::Off.as_i32(), 2);
    }
}
