//! Display names for the monitored vital signs.
//!
//! These appear verbatim in alert messages (`"<name> is out of range!"`)
//! and as the `vital` field on log events and errors.

/// Body temperature, in degrees Fahrenheit.
pub const VITAL_TEMPERATURE: &str = "Temperature";

/// Pulse rate, in beats per minute.
pub const VITAL_PULSE_RATE: &str = "Pulse Rate";

/// Blood-oxygen saturation (SpO2), as a percentage.
pub const VITAL_OXYGEN_SATURATION: &str = "Oxygen Saturation";

/// Build the alert message shown when `name` is out of range.
pub fn out_of_range_message(name: &str) -> String {
    format!("{name} is out of range!")
}
