//! Precision constants for tangency comparisons.
//!
//! Tolerances scale with the numeric backend: the values here suit f64.
//! A wider-precision backend should tighten them through
//! `GasketBuilder::tolerance`, a narrower one should loosen them.

/// Tangency tolerance for the sign-adjusted distance-radius identity
/// under f64. A candidate is tangent to a generator when
/// |d^2 - (r1 + r2)^2| falls below this value.
pub const TANGENCY: f64 = 1.0e-8;

/// Loose tangency tolerance for poorly conditioned configurations
/// (large curvature spread at deep recursion levels).
pub const TANGENCY_LOOSE: f64 = 1.0e-6;

/// Fundamental resolution for zero checks on curvatures and lengths.
/// This is for numerical zero checks, NOT geometric tolerance.
pub const RESOLUTION: f64 = f64::MIN_POSITIVE;
