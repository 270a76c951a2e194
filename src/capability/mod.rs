//! Process capability analysis.
//!
//! Computes the standard short-term capability indices for assessing how
//! well a process meets its specification limits.
//!
//! # Indices
//!
//! - **Cp** — Potential capability (spread vs tolerance)
//! - **Cpu**, **Cpl** — One-sided capability against USL / LSL
//! - **Cpk** — Actual capability (centering considered)
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.

mod indices;

pub use indices::{cp, cpk, cpl, cpu, CapabilityIndices};
