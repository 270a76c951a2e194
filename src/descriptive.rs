//! Descriptive statistics.

use crate::error::{Error, Result};

/// Spread of a sample, `max(values) - min(values)`.
///
/// Extremes are tracked by strict comparison from the first element, so a
/// leading NaN yields NaN while a later NaN is passed over.
///
/// # Errors
///
/// [`Error::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use dp_math::descriptive::range;
///
/// assert_eq!(range(&[5.0, 1.0, 3.0]).unwrap(), 4.0);
/// assert!(range(&[]).is_err());
/// ```
pub fn range(values: &[f64]) -> Result<f64> {
    let (first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(lo, hi), &v| {
            (ordered_min(lo, v), ordered_max(hi, v))
        });
    Ok(max - min)
}

/// Smaller of two values, keeping `a` unless `b` compares strictly less.
///
/// Unlike [`f64::min`], a NaN in `a` is returned rather than skipped.
pub(crate) fn ordered_min(a: f64, b: f64) -> f64 {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two values, keeping `a` unless `b` compares strictly greater.
pub(crate) fn ordered_max(a: f64, b: f64) -> f64 {
    if b > a {
        b
    } else {
        a
    }
}
