//! Specification limits.

/// Upper and lower specification limits for a measured characteristic.
///
/// `usl >= lsl` is expected for meaningful results but is not validated:
/// callers that pass inverted limits get whatever the formulas produce.
///
/// # Examples
///
/// ```
/// use dp_math::SpecLimits;
///
/// let limits = SpecLimits::new(20.0, 10.0);
/// assert!(limits.contains(10.0)); // bounds are inclusive
/// assert!(limits.contains(20.0));
/// assert!(!limits.contains(20.5));
/// assert_eq!(limits.width(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecLimits {
    /// Upper specification limit.
    pub usl: f64,
    /// Lower specification limit.
    pub lsl: f64,
}

impl SpecLimits {
    pub fn new(usl: f64, lsl: f64) -> Self {
        Self { usl, lsl }
    }

    /// Returns `true` iff `lsl <= value <= usl`.
    ///
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.usl >= value && value >= self.lsl
    }

    /// Tolerance width, `usl - lsl`.
    pub fn width(&self) -> f64 {
        self.usl - self.lsl
    }
}
