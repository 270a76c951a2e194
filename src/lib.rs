//! # dp-math
//!
//! Process capability and measurement-quality metrics for manufacturing
//! data: capability indices, deviation severity, linear trend, range, and
//! pass rate against specification limits.
//!
//! Every function is a pure computation over `f64` values held in memory.
//! Failures are returned as [`Error`] and never recovered internally.
//!
//! ## Modules
//!
//! - [`capability`] — Capability indices (Cp, Cpu, Cpl, Cpk)
//! - [`adsr`] — Average deviation severity ratio, single and series
//! - [`regression`] — Least-squares linear trend (`polyfit`)
//! - [`descriptive`] — Range
//! - [`pist`] — Pass/in-tolerance rate with missing-value handling
//!
//! ## Quick Start
//!
//! ```
//! use dp_math::{adsr, capability, PistAnalyzer};
//!
//! let cpk = capability::cpk(20.0, 10.0, 16.0, 1.0).unwrap();
//! assert!((cpk - 4.0 / 3.0).abs() < 1e-12);
//!
//! let severity = adsr::adsr_single(25.0, 20.0, 10.0).unwrap();
//! assert!((severity - 0.5).abs() < 1e-12);
//!
//! let rate = PistAnalyzer::new(20.0, 10.0)
//!     .pist(&[Some(12.0), Some(25.0), None])
//!     .unwrap();
//! assert_eq!(rate, 0.5);
//! ```

pub mod adsr;
pub mod capability;
pub mod descriptive;
pub mod error;
pub mod limits;
pub mod pist;
pub mod regression;

pub use error::{Error, Result};
pub use limits::SpecLimits;
pub use pist::PistAnalyzer;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
