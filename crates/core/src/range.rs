//! Range validation for a single vital reading.
//!
//! A caller handing over a string, `null` or a collection gets a
//! [`VitalsError::TypeMismatch`] instead of a silently coerced verdict.
//! Every number is compared as-is: infinities fall on the usual side of the
//! bounds and NaN lies within no range.

use crate::alert::{AlertPresenter, ALERT_REPEAT_COUNT};
use crate::error::VitalsError;
use crate::reading::Reading;
use crate::vital_names::out_of_range_message;

/// Inclusive bounds for a vital sign. `max` may be `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

impl VitalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range with no upper limit.
    pub const fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Check `value` against `[min, max]`, alerting through `presenter` on a
/// violation.
///
/// Returns `Ok(false)` once the alert has been shown. A non-numeric value is
/// rejected before any comparison and never triggers the alert.
pub fn is_within_range<P: AlertPresenter>(
    presenter: &mut P,
    name: &'static str,
    value: &Reading,
    min: f64,
    max: f64,
) -> Result<bool, VitalsError> {
    let reading = value.as_number(name)?;

    if VitalRange::new(min, max).contains(reading) {
        return Ok(true);
    }

    tracing::warn!(vital = name, value = reading, min, max, "Vital sign out of range");
    presenter.present(ALERT_REPEAT_COUNT, &out_of_range_message(name))?;
    Ok(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io;

    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    use super::*;

    fn check<P: AlertPresenter>(
        presenter: &mut P,
        value: impl Into<Reading>,
        min: f64,
        max: f64,
    ) -> Result<bool, VitalsError> {
        is_within_range(presenter, "test", &value.into(), min, max)
    }

    /// Records every presentation request instead of blinking.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(u32, String)>,
    }

    impl AlertPresenter for Recorder {
        fn present(&mut self, repeat_count: u32, message: &str) -> io::Result<()> {
            self.calls.push((repeat_count, message.to_string()));
            Ok(())
        }
    }

    struct FailingPresenter;

    impl AlertPresenter for FailingPresenter {
        fn present(&mut self, _repeat_count: u32, _message: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    #[test]
    fn accepts_boundary_values() {
        let mut rec = Recorder::default();
        assert!(check(&mut rec, json!(0.0), 0.0, 1.0).unwrap());
        assert!(check(&mut rec, json!(0.5), 0.0, 1.0).unwrap());
        assert!(check(&mut rec, json!(1), 0.0, 1.0).unwrap());
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn rejects_below_min_and_alerts() {
        let mut rec = Recorder::default();
        assert!(!check(&mut rec, json!(-0.01), 0.0, 1.0).unwrap());
        assert_eq!(rec.calls, vec![(6, "test is out of range!".to_string())]);
    }

    #[test]
    fn rejects_above_max_and_alerts() {
        let mut rec = Recorder::default();
        assert!(!check(&mut rec, json!(1.01), 0.0, 1.0).unwrap());
        assert_eq!(rec.calls.len(), 1);
    }

    #[test]
    fn infinite_max_only_checks_lower_bound() {
        let mut rec = Recorder::default();
        assert!(check(&mut rec, json!(1e300), 5.0, f64::INFINITY).unwrap());
        assert!(!check(&mut rec, json!(4.9), 5.0, f64::INFINITY).unwrap());
        assert_eq!(rec.calls.len(), 1);
    }

    #[test]
    fn infinities_are_compared_not_rejected() {
        let mut rec = Recorder::default();
        assert!(check(&mut rec, f64::INFINITY, 5.0, f64::INFINITY).unwrap());
        assert!(!check(&mut rec, f64::INFINITY, 0.0, 1.0).unwrap());
        assert!(!check(&mut rec, f64::NEG_INFINITY, 0.0, 1.0).unwrap());
        assert_eq!(rec.calls.len(), 2);
    }

    #[test]
    fn nan_lies_outside_every_range() {
        let mut rec = Recorder::default();
        assert!(!check(&mut rec, f64::NAN, 0.0, f64::INFINITY).unwrap());
        assert_eq!(rec.calls, vec![(6, "test is out of range!".to_string())]);
    }

    #[test]
    fn non_numeric_values_are_type_mismatches() {
        let mut rec = Recorder::default();
        let cases = [
            (json!("1"), "string"),
            (Value::Null, "null"),
            (json!([1]), "array"),
            (json!({"v": 1}), "object"),
            (json!(true), "boolean"),
        ];
        for (value, expected) in cases {
            assert_matches!(
                check(&mut rec, value, 0.0, 2.0),
                Err(VitalsError::TypeMismatch { vital: "test", found }) if found == expected
            );
        }
        assert!(rec.calls.is_empty(), "type mismatches must not alert");
    }

    #[test]
    fn presenter_failure_surfaces_as_alert_error() {
        assert_matches!(
            check(&mut FailingPresenter, json!(9), 0.0, 1.0),
            Err(VitalsError::Alert(_))
        );
    }

    #[test]
    fn range_helpers() {
        let spo2 = VitalRange::at_least(90.0);
        assert_eq!(spo2.max, f64::INFINITY);
        assert!(spo2.contains(10_000.0));
        assert!(spo2.contains(f64::INFINITY));
        assert!(!spo2.contains(89.9));

        let pulse = VitalRange::new(60.0, 100.0);
        assert!(pulse.contains(60.0));
        assert!(pulse.contains(100.0));
        assert!(!pulse.contains(100.1));
    }
}
