//! Named vital checks and the combined verdict.
//!
//! The free functions alert on the process stdout with the blocking blink
//! animation. Use [`VitalMonitor`] to supply a different presenter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::alert::{AlertPresenter, BlinkAlert};
use crate::error::VitalsError;
use crate::range::{is_within_range, VitalRange};
use crate::reading::Reading;
use crate::vital_names::{VITAL_OXYGEN_SATURATION, VITAL_PULSE_RATE, VITAL_TEMPERATURE};

/// The vital signs this crate knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalSign {
    Temperature,
    PulseRate,
    OxygenSaturation,
}

impl VitalSign {
    /// Evaluation order used by the combined check.
    pub const ALL: [VitalSign; 3] = [
        VitalSign::Temperature,
        VitalSign::PulseRate,
        VitalSign::OxygenSaturation,
    ];

    /// Name shown in alerts and errors.
    pub fn name(self) -> &'static str {
        match self {
            VitalSign::Temperature => VITAL_TEMPERATURE,
            VitalSign::PulseRate => VITAL_PULSE_RATE,
            VitalSign::OxygenSaturation => VITAL_OXYGEN_SATURATION,
        }
    }

    /// Clinically acceptable range, bounds inclusive.
    pub fn range(self) -> VitalRange {
        match self {
            VitalSign::Temperature => VitalRange::new(95.0, 102.0),
            VitalSign::PulseRate => VitalRange::new(60.0, 100.0),
            VitalSign::OxygenSaturation => VitalRange::at_least(90.0),
        }
    }
}

/// One set of readings for a patient, as received from a caller.
///
/// Fields stay untyped so a malformed value is reported by the check that
/// consumes it, in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalReadings {
    pub temperature: Value,
    pub pulse_rate: Value,
    pub spo2: Value,
}

/// Runs vital checks, alerting through the presenter it owns.
#[derive(Debug)]
pub struct VitalMonitor<P> {
    presenter: P,
}

impl<P: AlertPresenter> VitalMonitor<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Check a single reading against the fixed range for `vital`.
    pub fn check(
        &mut self,
        vital: VitalSign,
        value: impl Into<Reading>,
    ) -> Result<bool, VitalsError> {
        let range = vital.range();
        is_within_range(
            &mut self.presenter,
            vital.name(),
            &value.into(),
            range.min,
            range.max,
        )
    }

    pub fn is_temperature_ok(&mut self, value: impl Into<Reading>) -> Result<bool, VitalsError> {
        self.check(VitalSign::Temperature, value)
    }

    pub fn is_pulse_rate_ok(&mut self, value: impl Into<Reading>) -> Result<bool, VitalsError> {
        self.check(VitalSign::PulseRate, value)
    }

    pub fn is_spo2_ok(&mut self, value: impl Into<Reading>) -> Result<bool, VitalsError> {
        self.check(VitalSign::OxygenSaturation, value)
    }

    /// Temperature, then pulse rate, then SpO2. Stops at the first reading
    /// that is out of range, so later checks neither run nor alert.
    pub fn vitals_ok(
        &mut self,
        temperature: impl Into<Reading>,
        pulse_rate: impl Into<Reading>,
        spo2: impl Into<Reading>,
    ) -> Result<bool, VitalsError> {
        let readings: [Reading; 3] = [temperature.into(), pulse_rate.into(), spo2.into()];
        for (vital, reading) in VitalSign::ALL.into_iter().zip(readings) {
            if !self.check(vital, reading)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// [`Self::vitals_ok`] over a parsed record.
    pub fn check_readings(&mut self, readings: &VitalReadings) -> Result<bool, VitalsError> {
        self.vitals_ok(&readings.temperature, &readings.pulse_rate, &readings.spo2)
    }
}

fn console_monitor() -> VitalMonitor<BlinkAlert<std::io::Stdout>> {
    VitalMonitor::new(BlinkAlert::stdout())
}

/// Temperature within 95..=102.
pub fn is_temperature_ok(value: impl Into<Reading>) -> Result<bool, VitalsError> {
    console_monitor().is_temperature_ok(value)
}

/// Pulse rate within 60..=100.
pub fn is_pulse_rate_ok(value: impl Into<Reading>) -> Result<bool, VitalsError> {
    console_monitor().is_pulse_rate_ok(value)
}

/// SpO2 of at least 90, no upper limit.
pub fn is_spo2_ok(value: impl Into<Reading>) -> Result<bool, VitalsError> {
    console_monitor().is_spo2_ok(value)
}

/// All three vitals in range. See [`VitalMonitor::vitals_ok`].
pub fn vitals_ok(
    temperature: impl Into<Reading>,
    pulse_rate: impl Into<Reading>,
    spo2: impl Into<Reading>,
) -> Result<bool, VitalsError> {
    console_monitor().vitals_ok(temperature, pulse_rate, spo2)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
