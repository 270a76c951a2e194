//! Average deviation severity ratio (ADSR).
//!
//! ADSR measures how far out of specification a measurement lies, as a
//! fraction of the tolerance width, scaled by a severity factor `s`:
//!
//! ```text
//! b        = 0 if LSL <= m <= USL, else 1
//! severity = (max(m - USL, LSL - m) / (USL - LSL)) · b · s
//! ```
//!
//! In-spec measurements (bounds inclusive) contribute zero. The series form
//! averages the per-measurement severity.
//!
//! The deviation and the division are always evaluated, even when `b = 0`,
//! so a zero-width tolerance fails for every measurement and NaN inputs
//! propagate into the result.
//!
//! # Examples
//!
//! ```
//! use dp_math::adsr::{adsr_series, adsr_series_scaled};
//!
//! // 25 is 5 above USL on a tolerance of width 10 → 0.5, averaged over 3
//! let r = adsr_series(&[10.0, 25.0, 15.0], 20.0, 10.0).unwrap().unwrap();
//! assert!((r - 0.5 / 3.0).abs() < 1e-12);
//!
//! // No data is distinct from zero severity
//! assert_eq!(adsr_series_scaled(&[], 20.0, 10.0, 2.0).unwrap(), None);
//! ```

use crate::descriptive::ordered_max;
use crate::error::{checked_div, Result};
use crate::limits::SpecLimits;

/// Severity scale applied when none is given.
pub const DEFAULT_SEVERITY: f64 = 1.0;

/// Severity of one measurement with `s` = [`DEFAULT_SEVERITY`].
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `usl == lsl`.
///
/// # Examples
///
/// ```
/// use dp_math::adsr::adsr_single;
///
/// assert_eq!(adsr_single(15.0, 20.0, 10.0).unwrap(), 0.0);
/// assert_eq!(adsr_single(20.0, 20.0, 10.0).unwrap(), 0.0); // inclusive
/// assert!((adsr_single(25.0, 20.0, 10.0).unwrap() - 0.5).abs() < 1e-12);
/// ```
pub fn adsr_single(measurement: f64, usl: f64, lsl: f64) -> Result<f64> {
    adsr_single_scaled(measurement, usl, lsl, DEFAULT_SEVERITY)
}

/// Severity of one measurement scaled by `s`.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `usl == lsl`.
///
/// # Examples
///
/// ```
/// use dp_math::adsr::adsr_single_scaled;
///
/// // 5 below LSL on width 10, tripled
/// let r = adsr_single_scaled(5.0, 20.0, 10.0, 3.0).unwrap();
/// assert!((r - 1.5).abs() < 1e-12);
/// ```
pub fn adsr_single_scaled(measurement: f64, usl: f64, lsl: f64, s: f64) -> Result<f64> {
    let limits = SpecLimits::new(usl, lsl);
    let b = if limits.contains(measurement) { 0.0 } else { 1.0 };
    let normalized = checked_div(deviation(measurement, &limits), limits.width())?;
    Ok(normalized * b * s)
}

/// Mean severity over a series with `s` = [`DEFAULT_SEVERITY`].
///
/// Returns `Ok(None)` for an empty series.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `usl == lsl`
/// and the series is non-empty.
///
/// # Examples
///
/// ```
/// use dp_math::adsr::adsr_series;
///
/// assert_eq!(adsr_series(&[12.0, 15.0, 18.0], 20.0, 10.0).unwrap(), Some(0.0));
/// assert_eq!(adsr_series(&[], 20.0, 10.0).unwrap(), None);
/// ```
pub fn adsr_series(measurements: &[f64], usl: f64, lsl: f64) -> Result<Option<f64>> {
    adsr_series_scaled(measurements, usl, lsl, DEFAULT_SEVERITY)
}

/// Mean severity over a series scaled by `s`.
///
/// Returns `Ok(None)` for an empty series; the limits are not inspected in
/// that case.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `usl == lsl`
/// and the series is non-empty.
pub fn adsr_series_scaled(
    measurements: &[f64],
    usl: f64,
    lsl: f64,
    s: f64,
) -> Result<Option<f64>> {
    if measurements.is_empty() {
        return Ok(None);
    }
    let mut sum = 0.0;
    for &m in measurements {
        sum += adsr_single_scaled(m, usl, lsl, s)?;
    }
    Ok(Some(sum / measurements.len() as f64))
}

/// Distance beyond whichever bound is nearer to being violated.
///
/// Non-positive when `m` is in spec. Keeps the first operand unless the
/// second is strictly greater, so a NaN measurement yields NaN.
fn deviation(m: f64, limits: &SpecLimits) -> f64 {
    ordered_max(m - limits.usl, limits.lsl - m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // -----------------------------------------------------------------------
    // Single measurement
    // -----------------------------------------------------------------------

    #[test]
    fn single_within_limits() {
        assert_eq!(adsr_single(15.0, 20.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn single_above_usl() {
        let r = adsr_single_scaled(25.0, 20.0, 10.0, 1.0).unwrap();
        assert!((r - 0.5).abs() < 1e-12, "expected 0.5, got {r}");
    }

    #[test]
    fn single_below_lsl_with_scale() {
        let r = adsr_single_scaled(5.0, 20.0, 10.0, 3.0).unwrap();
        assert!((r - 1.5).abs() < 1e-12, "expected 1.5, got {r}");
    }

    #[test]
    fn single_on_limits_is_in_spec() {
        assert_eq!(adsr_single(20.0, 20.0, 10.0).unwrap(), 0.0);
        assert_eq!(adsr_single(10.0, 20.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn single_default_scale_matches_explicit_one() {
        assert_eq!(
            adsr_single(27.0, 20.0, 10.0).unwrap(),
            adsr_single_scaled(27.0, 20.0, 10.0, DEFAULT_SEVERITY).unwrap()
        );
    }

    #[test]
    fn single_zero_width_fails_even_in_spec() {
        assert_eq!(adsr_single(20.0, 20.0, 20.0), Err(Error::DivisionByZero));
        assert_eq!(adsr_single(25.0, 20.0, 20.0), Err(Error::DivisionByZero));
    }

    #[test]
    fn single_nan_propagates() {
        assert!(adsr_single(f64::NAN, 20.0, 10.0).unwrap().is_nan());
    }

    // -----------------------------------------------------------------------
    // Series
    // -----------------------------------------------------------------------

    #[test]
    fn series_all_within_limits() {
        assert_eq!(adsr_series(&[12.0, 15.0, 18.0], 20.0, 10.0).unwrap(), Some(0.0));
    }

    #[test]
    fn series_one_above_usl() {
        let r = adsr_series_scaled(&[10.0, 25.0, 15.0], 20.0, 10.0, 1.0)
            .unwrap()
            .unwrap();
        assert!((r - 0.5 / 3.0).abs() < 1e-12, "expected 0.16667, got {r}");
    }

    #[test]
    fn series_one_below_lsl_with_scale() {
        let r = adsr_series_scaled(&[10.0, 5.0, 15.0], 20.0, 10.0, 2.0)
            .unwrap()
            .unwrap();
        assert!((r - 1.0 / 3.0).abs() < 1e-12, "expected 0.33333, got {r}");
    }

    #[test]
    fn series_empty_is_no_result() {
        assert_eq!(adsr_series(&[], 20.0, 10.0).unwrap(), None);
        // no division happens for an empty series
        assert_eq!(adsr_series(&[], 20.0, 20.0).unwrap(), None);
    }

    #[test]
    fn series_on_limits() {
        assert_eq!(adsr_series(&[10.0, 20.0], 20.0, 10.0).unwrap(), Some(0.0));
    }

    #[test]
    fn series_zero_width() {
        assert_eq!(adsr_series(&[15.0], 20.0, 20.0), Err(Error::DivisionByZero));
    }

    #[test]
    fn series_is_order_independent() {
        let a = adsr_series(&[30.0, 5.0, 12.0, 22.0], 20.0, 10.0).unwrap();
        let b = adsr_series(&[22.0, 12.0, 5.0, 30.0], 20.0, 10.0).unwrap();
        assert!((a.unwrap() - b.unwrap()).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn severity_non_negative(
            m in -1e3_f64..1e3,
            lsl in -1e3_f64..1e3,
            width in 1e-3_f64..1e3,
            s in 0.0_f64..10.0,
        ) {
            let r = adsr_single_scaled(m, lsl + width, lsl, s).unwrap();
            prop_assert!(r >= 0.0, "severity = {}", r);
        }

        #[test]
        fn in_spec_is_zero(
            lsl in -1e3_f64..1e3,
            width in 1e-3_f64..1e3,
            frac in 0.0_f64..=1.0,
        ) {
            let usl = lsl + width;
            let m = (lsl + frac * width).clamp(lsl, usl);
            prop_assert_eq!(adsr_single(m, usl, lsl).unwrap(), 0.0);
        }

        #[test]
        fn series_is_mean_of_singles(
            data in proptest::collection::vec(-1e3_f64..1e3, 1..=30),
        ) {
            let series = adsr_series(&data, 20.0, 10.0).unwrap().unwrap();
            let mean = data
                .iter()
                .map(|&m| adsr_single(m, 20.0, 10.0).unwrap())
                .sum::<f64>()
                / data.len() as f64;
            prop_assert!((series - mean).abs() < 1e-9);
        }
    }
}
