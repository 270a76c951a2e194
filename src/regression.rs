//! Linear trend fitting.
//!
//! First-order ordinary least squares through `(xᵢ, valueᵢ)`, solved with an
//! SVD least-squares solve on the design matrix `[x | 1]`.
//!
//! # Examples
//!
//! ```
//! use dp_math::regression::polyfit;
//!
//! let values = [1.0, 3.0, 5.0, 7.0];
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let (fitted, slope) = polyfit(&values, &x).unwrap();
//! assert!((slope - 2.0).abs() < 1e-10);
//! assert!((fitted[3] - 7.0).abs() < 1e-10);
//! ```

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Fitted line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearTrend {
    /// Slope (m).
    pub slope: f64,
    /// Intercept (b).
    pub intercept: f64,
}

impl LinearTrend {
    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluates the line at every `x`, in order.
    pub fn fitted(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// Fits a degree-1 least-squares line and returns the fitted values along
/// with the slope.
///
/// The intercept is not returned; use [`linear_fit`] when it is needed.
///
/// # Errors
///
/// See [`linear_fit`].
///
/// # Examples
///
/// ```
/// use dp_math::regression::polyfit;
///
/// let (fitted, slope) = polyfit(&[10.0, 5.0, 0.0], &[0.0, 1.0, 2.0]).unwrap();
/// assert!((slope + 5.0).abs() < 1e-10);
/// assert_eq!(fitted.len(), 3);
/// ```
pub fn polyfit(values: &[f64], x: &[f64]) -> Result<(Vec<f64>, f64)> {
    let trend = linear_fit(values, x)?;
    Ok((trend.fitted(x), trend.slope))
}

/// Ordinary least-squares line through `(x[i], values[i])`.
///
/// When `x` holds fewer than two distinct values the system is rank
/// deficient; the minimum-norm solution is returned.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `values` is empty
/// - [`Error::LengthMismatch`] if the slices differ in length
/// - [`Error::NonFinite`] if any x-coordinate is NaN or infinite
/// - [`Error::Solver`] if the SVD solve fails
///
/// # References
///
/// Draper & Smith (1998). "Applied Regression Analysis", 3rd edition.
///
/// # Examples
///
/// ```
/// use dp_math::regression::linear_fit;
///
/// let trend = linear_fit(&[1.0, 3.0, 5.0, 7.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert!((trend.slope - 2.0).abs() < 1e-10);
/// assert!((trend.intercept - 1.0).abs() < 1e-10);
/// ```
pub fn linear_fit(values: &[f64], x: &[f64]) -> Result<LinearTrend> {
    let n = values.len();
    if n != x.len() {
        return Err(Error::LengthMismatch {
            values: n,
            x: x.len(),
        });
    }
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFinite);
    }

    if x.iter().all(|&xi| xi == x[0]) {
        log::debug!("linear fit over {n} points with a single distinct x; fit is rank deficient");
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { x[i] } else { 1.0 });
    let rhs = DVector::from_column_slice(values);

    // Singular values below n·ε relative to the largest are treated as zero.
    let svd = design.svd(true, true);
    let eps = svd.singular_values.max() * n as f64 * f64::EPSILON;
    let coef = svd.solve(&rhs, eps).map_err(Error::Solver)?;

    let trend = LinearTrend {
        slope: coef[0],
        intercept: coef[1],
    };
    log::trace!(
        "linear fit: n={n} slope={} intercept={}",
        trend.slope,
        trend.intercept
    );
    Ok(trend)
}
