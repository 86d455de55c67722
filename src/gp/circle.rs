//! Curvature-form circle.
//!
//! The circle is stored as a center plus a signed curvature k. The
//! radius is derived as 1/|k| and is always strictly positive. A
//! negative curvature marks the circle that encloses the configuration
//! rather than nesting inside it.

use crate::gp::Pnt2d;
use crate::{lossy, GasketError, Result};
use num_traits::Float;

/// A circle in curvature form: center plus signed nonzero curvature.
/// Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle<F> {
    center: Pnt2d<F>,
    curvature: F,
}

impl<F: Float> Circle<F> {
    /// Creates a circle from its center and signed curvature.
    /// Rejects zero or non-finite curvature, which has no circle
    /// interpretation (a zero curvature describes a straight line).
    pub fn from_curvature(center: Pnt2d<F>, curvature: F) -> Result<Self> {
        if curvature == F::zero() || !curvature.is_finite() {
            return Err(GasketError::InvalidCurvature(lossy(curvature)));
        }
        Ok(Self { center, curvature })
    }

    /// Returns the center.
    #[inline]
    pub fn center(&self) -> Pnt2d<F> {
        self.center
    }

    /// Returns the signed curvature.
    #[inline]
    pub fn curvature(&self) -> F {
        self.curvature
    }

    /// Returns the radius, 1/|k|. Always strictly positive.
    #[inline]
    pub fn radius(&self) -> F {
        self.curvature.abs().recip()
    }

    /// Returns the sign-adjusted radius, sign(k) * r = 1/k.
    #[inline]
    pub fn signed_radius(&self) -> F {
        self.curvature.recip()
    }

    /// True for the negative-curvature circle that encloses the rest of
    /// the configuration.
    #[inline]
    pub fn is_enclosing(&self) -> bool {
        self.curvature < F::zero()
    }

    /// Checks tangency against another circle within tolerance.
    ///
    /// The sign-adjusted radius sum encodes both externally tangent
    /// circles (same-sign curvature, center distance r1 + r2) and
    /// internally tangent ones (opposite-sign curvature, center
    /// distance |r1 - r2|) in a single identity:
    /// |d^2 - (1/k1 + 1/k2)^2| < tolerance.
    pub fn is_tangent(&self, other: &Circle<F>, tolerance: F) -> bool {
        let d2 = self.center.square_distance(&other.center);
        let rsum = self.signed_radius() + other.signed_radius();
        (d2 - rsum * rsum).abs() < tolerance
    }
}
