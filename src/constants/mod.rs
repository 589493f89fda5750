//! Constants module for geometric calculations

use std::f64::consts::PI;

// Tolerances
/// Shared tolerance for floating point comparisons
///
/// Every epsilon test in the crate (zero-vector checks, parallelism tests,
/// determinant singularity, on-plane membership) uses this single constant so
/// that adjacent classifiers cannot disagree about the same configuration.
pub const EPSILON: f64 = 1e-9;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
