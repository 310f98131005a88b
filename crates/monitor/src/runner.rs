//! Line-oriented driver around [`VitalMonitor`].
//!
//! Each non-blank input line is a JSON object
//! `{"temperature": .., "pulse_rate": .., "spo2": ..}`. Lines are checked
//! in order; malformed lines are counted and skipped, but a failure to show
//! an alert aborts the run.

use std::io::BufRead;

use vitals_core::{AlertPresenter, VitalMonitor, VitalReadings, VitalsError};

/// Exit code when every record was within range.
pub const EXIT_OK: i32 = 0;
/// Exit code when at least one record was out of range.
pub const EXIT_OUT_OF_RANGE: i32 = 1;
/// Exit code when at least one record could not be checked.
pub const EXIT_MALFORMED: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Invalid reading record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Vitals(#[from] VitalsError),

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Tally of outcomes across a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ok: usize,
    pub out_of_range: usize,
    pub malformed: usize,
}

impl RunSummary {
    /// Malformed input outranks out-of-range readings.
    pub fn exit_code(&self) -> i32 {
        if self.malformed > 0 {
            EXIT_MALFORMED
        } else if self.out_of_range > 0 {
            EXIT_OUT_OF_RANGE
        } else {
            EXIT_OK
        }
    }
}

/// Parse and check one record.
pub fn check_line<P: AlertPresenter>(
    monitor: &mut VitalMonitor<P>,
    line: &str,
) -> Result<bool, MonitorError> {
    let readings: VitalReadings = serde_json::from_str(line)?;
    Ok(monitor.check_readings(&readings)?)
}

/// Check every record from `input`.
///
/// Returns an error only for unrecoverable failures: unreadable input or an
/// alert that could not be written.
pub fn run<R: BufRead, P: AlertPresenter>(
    input: R,
    monitor: &mut VitalMonitor<P>,
) -> Result<RunSummary, MonitorError> {
    let mut summary = RunSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match check_line(monitor, &line) {
            Ok(true) => {
                summary.ok += 1;
                tracing::info!(line = line_no, "Vitals ok");
            }
            Ok(false) => {
                summary.out_of_range += 1;
                tracing::warn!(line = line_no, "Vitals out of range");
            }
            Err(MonitorError::Vitals(VitalsError::Alert(e))) => {
                return Err(VitalsError::Alert(e).into());
            }
            Err(e) => {
                summary.malformed += 1;
                tracing::error!(line = line_no, error = %e, "Skipping record");
            }
        }
    }

    tracing::info!(
        ok = summary.ok,
        out_of_range = summary.out_of_range,
        malformed = summary.malformed,
        "Run complete",
    );

    Ok(summary)
}
