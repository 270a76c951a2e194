//! Pass/in-tolerance rate ("pist").
//!
//! [`PistAnalyzer`] holds one pair of specification limits and classifies
//! measurements against them. Missing measurements (`None`) are skipped
//! rather than counted as failures.
//!
//! # Examples
//!
//! ```
//! use dp_math::PistAnalyzer;
//!
//! let analyzer = PistAnalyzer::new(20.0, 10.0);
//! let rate = analyzer.pist(&[Some(12.0), Some(25.0), Some(18.0), None]).unwrap();
//! assert!((rate - 2.0 / 3.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use crate::limits::SpecLimits;

/// Pass-rate calculator bound to a fixed pair of specification limits.
///
/// Immutable after construction, so a shared reference can be used from
/// several threads at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PistAnalyzer {
    limits: SpecLimits,
}

impl PistAnalyzer {
    /// Creates an analyzer for `lsl <= value <= usl`. No validation.
    pub fn new(usl: f64, lsl: f64) -> Self {
        Self::from_limits(SpecLimits::new(usl, lsl))
    }

    pub fn from_limits(limits: SpecLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SpecLimits {
        self.limits
    }

    pub fn usl(&self) -> f64 {
        self.limits.usl
    }

    pub fn lsl(&self) -> f64 {
        self.limits.lsl
    }

    /// Returns `true` iff `lsl <= value <= usl`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dp_math::PistAnalyzer;
    ///
    /// let analyzer = PistAnalyzer::new(20.0, 10.0);
    /// assert!(analyzer.passing(10.0));
    /// assert!(analyzer.passing(20.0));
    /// assert!(!analyzer.passing(25.0));
    /// ```
    pub fn passing(&self, value: f64) -> bool {
        self.limits.contains(value)
    }

    /// Fraction of present entries that pass.
    ///
    /// `None` entries are excluded from both the numerator and the
    /// denominator. A slice in which every entry is `None` yields `0.0`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `values` has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use dp_math::PistAnalyzer;
    ///
    /// let analyzer = PistAnalyzer::new(20.0, 10.0);
    /// assert_eq!(analyzer.pist(&[None, None]).unwrap(), 0.0);
    /// assert!(analyzer.pist(&[]).is_err());
    /// ```
    pub fn pist(&self, values: &[Option<f64>]) -> Result<f64> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        let (passing, total) = values
            .iter()
            .flatten()
            .fold((0_usize, 0_usize), |(p, t), &v| {
                (p + usize::from(self.passing(v)), t + 1)
            });
        if total == 0 {
            return Ok(0.0);
        }
        Ok(passing as f64 / total as f64)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pist_in_unit_interval(
            data in proptest::collection::vec(
                proptest::option::of(-100.0_f64..100.0), 1..=50),
        ) {
            let rate = PistAnalyzer::new(20.0, 10.0).pist(&data).unwrap();
            prop_assert!((0.0..=1.0).contains(&rate), "pist = {}", rate);
        }

        #[test]
        fn missing_entries_do_not_change_rate(
            data in proptest::collection::vec(-100.0_f64..100.0, 1..=30),
        ) {
            let analyzer = PistAnalyzer::new(20.0, 10.0);
            let dense: Vec<Option<f64>> = data.iter().copied().map(Some).collect();
            let mut sparse = dense.clone();
            sparse.push(None);
            sparse.insert(0, None);
            prop_assert_eq!(analyzer.pist(&dense).unwrap(), analyzer.pist(&sparse).unwrap());
        }
    }
}
