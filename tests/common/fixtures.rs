//! Common test fixtures and constants.

/// Device name used throughout the tests.
pub const DEVICE: &str = "theups";

// =============================================================================
// UPS-MIB OIDs, as snmpd sends them
// =============================================================================

pub const UPS_IDENT_MANUFACTURER: &str = ".1.3.6.1.2.1.33.1.1.1.0";
pub const UPS_IDENT_MODEL: &str = ".1.3.6.1.2.1.33.1.1.2.0";
pub const UPS_IDENT_UPS_SOFTWARE_VERSION: &str = ".1.3.6.1.2.1.33.1.1.3.0";
pub const UPS_IDENT_AGENT_SOFTWARE_VERSION: &str = ".1.3.6.1.2.1.33.1.1.4.0";
pub const UPS_BATTERY_STATUS: &str = ".1.3.6.1.2.1.33.1.2.1.0";
pub const UPS_ESTIMATED_CHARGE_REMAINING: &str = ".1.3.6.1.2.1.33.1.2.4.0";
pub const UPS_BATTERY_VOLTAGE: &str = ".1.3.6.1.2.1.33.1.2.5.0";
pub const UPS_SECONDS_ON_BATTERY: &str = ".1.3.6.1.2.1.33.1.2.2.0";
pub const UPS_BATTERY_TEMPERATURE: &str = ".1.3.6.1.2.1.33.1.2.7.0";
pub const UPS_INPUT_FREQUENCY: &str = ".1.3.6.1.2.1.33.1.3.3.1.2.1";
pub const UPS_OUTPUT_SOURCE: &str = ".1.3.6.1.2.1.33.1.4.1.0";
pub const UPS_OUTPUT_PERCENT_LOAD: &str = ".1.3.6.1.2.1.33.1.4.4.1.5.1";
pub const UPS_TEST_ID: &str = ".1.3.6.1.2.1.33.1.7.1.0";
pub const UPS_CONFIG_AUDIBLE_STATUS: &str = ".1.3.6.1.2.1.33.1.9.8.0";
pub const UPS_AUTO_RESTART: &str = ".1.3.6.1.2.1.33.1.8.5.0";

/// A UPS-MIB OID with no managed object.
pub const UNLISTED_UPS_OID: &str = ".1.3.6.1.2.1.33.1.2.3.0";
/// sysDescr.0, outside the served subtree.
pub const SYS_DESCR: &str = ".1.3.6.1.2.1.1.1.0";

// =============================================================================
// upsc outputs
// =============================================================================

/// Healthy unit on line power.
pub const UPSC_ONLINE: &str = "\
battery.charge: 100
battery.charge.warning: 25
battery.voltage: 13.5
battery.voltage.low: 10.4
device.mfr: PowerWalker
device.model: VI 1500 LCD
input.frequency: 50.0
input.voltage: 229.0
output.voltage: 230.0
ups.beeper.status: enabled
ups.load: 17
ups.start.auto: yes
ups.status: OL
";

/// Same unit on battery with the low-battery flag set.
pub const UPSC_LOW_BATTERY: &str = "\
battery.charge: 9
battery.charge.warning: 25
battery.voltage: 11.5
battery.voltage.low: 10.4
device.mfr: PowerWalker
device.model: VI 1500 LCD
input.frequency: 0.0
input.voltage: 0.0
output.voltage: 228.0
ups.beeper.status: muted
ups.load: 23
ups.start.auto: no
ups.status: OB LB
";
