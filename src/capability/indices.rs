//! Process capability indices (Cp, Cpu, Cpl, Cpk).
//!
//! Capability indices compare the spread of a process against the width of
//! its specification. All four functions are closed-form and take the process
//! mean and standard deviation as given; nothing is estimated here unless
//! [`CapabilityIndices::from_data`] is used.
//!
//! A zero `sigma` is the defined failure mode and yields
//! [`Error::DivisionByZero`](crate::Error::DivisionByZero). No other
//! validation is performed.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 8.
//! - Kane (1986), "Process Capability Indices", *Journal of Quality Technology*
//!   18(1), pp. 41--52.

use u_numflow::stats;

use crate::descriptive::ordered_min;
use crate::error::{checked_div, Result};
use crate::limits::SpecLimits;

/// Potential capability: `Cp = (USL - LSL) / (6σ)`.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `sigma` is zero.
///
/// # Examples
///
/// ```
/// use dp_math::capability::cp;
///
/// assert_eq!(cp(1.5, -1.5, 1.0).unwrap(), 0.5);
/// assert!(cp(1.0, 1.0, 0.0).is_err());
/// ```
pub fn cp(usl: f64, lsl: f64, sigma: f64) -> Result<f64> {
    checked_div(usl - lsl, 6.0 * sigma)
}

/// Upper capability: `Cpu = (USL - mean) / (3σ)`.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `sigma` is zero.
///
/// # Examples
///
/// ```
/// use dp_math::capability::cpu;
///
/// assert_eq!(cpu(2.0, 1.0, 1.5).unwrap(), 1.0 / 4.5);
/// ```
pub fn cpu(usl: f64, mean: f64, sigma: f64) -> Result<f64> {
    checked_div(usl - mean, 3.0 * sigma)
}

/// Lower capability: `Cpl = (mean - LSL) / (3σ)`.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `sigma` is zero.
pub fn cpl(lsl: f64, mean: f64, sigma: f64) -> Result<f64> {
    checked_div(mean - lsl, 3.0 * sigma)
}

/// Actual capability: `Cpk = min(Cpu, Cpl)`.
///
/// Cpu is kept unless Cpl compares strictly less, so a NaN Cpu (for
/// example from a NaN USL) yields NaN.
///
/// # Errors
///
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `sigma` is zero.
///
/// # Examples
///
/// ```
/// use dp_math::capability::{cpk, cpl, cpu};
///
/// let (usl, lsl, mean, sigma) = (1.5, -1.5, 1.0, 0.1);
/// let expected = cpu(usl, mean, sigma).unwrap().min(cpl(lsl, mean, sigma).unwrap());
/// assert_eq!(cpk(usl, lsl, mean, sigma).unwrap(), expected);
/// ```
pub fn cpk(usl: f64, lsl: f64, mean: f64, sigma: f64) -> Result<f64> {
    Ok(ordered_min(cpu(usl, mean, sigma)?, cpl(lsl, mean, sigma)?))
}

/// The four short-term capability indices for one process.
///
/// # Index interpretation
///
/// | Index | Value | Interpretation |
/// |-------|-------|----------------|
/// | Cp | >= 1.33 | Spread fits the tolerance |
/// | Cpk | >= 1.33 | Spread fits and the process is centered |
///
/// Reference: Montgomery (2019), Chapter 8, Table 8.5.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityIndices {
    /// Cp = (USL - LSL) / (6σ).
    pub cp: f64,
    /// Cpu = (USL - mean) / (3σ).
    pub cpu: f64,
    /// Cpl = (mean - LSL) / (3σ).
    pub cpl: f64,
    /// Cpk = min(Cpu, Cpl).
    pub cpk: f64,
}

impl CapabilityIndices {
    /// Computes all four indices from a known mean and sigma.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if `sigma` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dp_math::{capability::CapabilityIndices, SpecLimits};
    ///
    /// let limits = SpecLimits::new(220.0, 200.0);
    /// let idx = CapabilityIndices::compute(limits, 215.0, 2.0).unwrap();
    /// assert!((idx.cp - 1.6667).abs() < 1e-4);
    /// assert_eq!(idx.cpk, idx.cpu);
    /// ```
    pub fn compute(limits: SpecLimits, mean: f64, sigma: f64) -> Result<Self> {
        let cpu = cpu(limits.usl, mean, sigma)?;
        let cpl = cpl(limits.lsl, mean, sigma)?;
        Ok(Self {
            cp: cp(limits.usl, limits.lsl, sigma)?,
            cpu,
            cpl,
            cpk: ordered_min(cpu, cpl),
        })
    }

    /// Estimates mean and sample standard deviation from `data`, then
    /// computes the indices.
    ///
    /// Returns `Ok(None)` if `data` has fewer than 2 elements or contains
    /// NaN or infinity.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`](crate::Error::DivisionByZero) if every
    /// observation is identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use dp_math::{capability::CapabilityIndices, SpecLimits};
    ///
    /// let limits = SpecLimits::new(11.0, 9.0);
    /// let data = [9.5, 10.0, 10.2, 9.8, 10.1, 10.3, 9.9, 10.0];
    /// let idx = CapabilityIndices::from_data(limits, &data).unwrap().unwrap();
    /// assert!(idx.cp > 0.0);
    ///
    /// assert!(CapabilityIndices::from_data(limits, &[10.0]).unwrap().is_none());
    /// ```
    pub fn from_data(limits: SpecLimits, data: &[f64]) -> Result<Option<Self>> {
        let (Some(mean), Some(sigma)) = (stats::mean(data), stats::std_dev(data)) else {
            return Ok(None);
        };
        Self::compute(limits, mean, sigma).map(Some)
    }
}
