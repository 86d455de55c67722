//! gasket: Apollonian gasket generation in curvature form.
//!
//! Starting from three mutually tangent circles derived from a random
//! non-degenerate triangle, the engine repeatedly applies the Descartes
//! circle theorem (and its complex-coordinate extension) to fill the
//! curvilinear gaps with new mutually tangent circles, down to a fixed
//! recursion depth. Rendering the result is the consumer's concern; the
//! crate only produces the circle set and the enclosing outer circle.

pub mod descartes;
pub mod gasket;
pub mod gp;
pub mod precision;
pub mod sample;
pub mod soddy;

// Re-exports for convenience
pub use descartes::{candidate_circles, descartes_circles, filter_tangent, FilterPolicy};
pub use gasket::{generate, Gasket, GasketBuilder};
pub use gp::{Circle, Pnt2d, XY};
pub use sample::random_triangle;
pub use soddy::soddy_circles;

/// Default tangency tolerance for the f64 backend
pub const TOLERANCE: f64 = precision::TANGENCY;

/// Result type for gasket operations
pub type Result<T> = std::result::Result<T, GasketError>;

#[derive(Debug, thiserror::Error)]
pub enum GasketError {
    #[error("No usable seed triangle found after {attempts} attempts")]
    DegenerateSeed { attempts: u32 },

    #[error("Invalid triangle: {0}")]
    InvalidTriangle(String),

    #[error("Curvature discriminant is negative: {0}")]
    NegativeDiscriminant(f64),

    #[error("Curvature must be finite and nonzero, got {0}")]
    InvalidCurvature(f64),
}

/// Lossy conversion for error payloads; the exact value only matters
/// for diagnostics.
pub(crate) fn lossy<F: num_traits::Float>(value: F) -> f64 {
    num_traits::ToPrimitive::to_f64(&value).unwrap_or(f64::NAN)
}
