//! `vitals-core` -- range checks for patient vital signs.
//!
//! Each check compares one reading against fixed clinical bounds and, on a
//! violation, shows a blocking console alert before returning `false`:
//!
//! | Vital             | Min | Max       |
//! |-------------------|-----|-----------|
//! | Temperature       | 95  | 102       |
//! | Pulse Rate        | 60  | 100       |
//! | Oxygen Saturation | 90  | unbounded |
//!
//! Bounds are inclusive. Readings are accepted as any Rust number or as a
//! dynamically typed [`serde_json::Value`] (see [`Reading`]); non-numbers
//! fail with [`VitalsError::TypeMismatch`] instead of producing a verdict.
//!
//! ```
//! use vitals_core::{SilentAlert, VitalMonitor};
//!
//! let mut monitor = VitalMonitor::new(SilentAlert);
//! assert!(monitor.vitals_ok(98.6, 70, 95).unwrap());
//! assert!(!monitor.vitals_ok(94, 70, 95).unwrap());
//! assert!(monitor.is_temperature_ok("98.6").is_err());
//! ```

pub mod alert;
pub mod error;
pub mod range;
pub mod reading;
pub mod vital_names;
pub mod vitals;

pub use alert::{AlertPresenter, BlinkAlert, SilentAlert, ALERT_REPEAT_COUNT, DEFAULT_BLINK_INTERVAL};
pub use error::VitalsError;
pub use range::{is_within_range, VitalRange};
pub use reading::Reading;
pub use vitals::{
    is_pulse_rate_ok, is_spo2_ok, is_temperature_ok, vitals_ok, VitalMonitor, VitalReadings,
    VitalSign,
};
