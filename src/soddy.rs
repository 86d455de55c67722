//! Initial Soddy configuration.
//!
//! Converts a non-degenerate triangle into three mutually tangent
//! circles: each circle sits on a vertex with radius equal to the
//! tangent length from that vertex to the triangle's incircle, so the
//! circles on any two vertices touch on the joining side.

use crate::gp::{Circle, Pnt2d};
use crate::{lossy, GasketError, Result};
use num_traits::Float;

/// Builds the three Soddy circles of the triangle `a`, `b`, `c`.
///
/// With side lengths la = |b - c|, lb = |c - a|, lc = |a - b| and
/// semiperimeter p, the circle at each vertex has curvature
/// 1/(p - opposite side). For a non-degenerate triangle all three
/// curvatures are strictly positive by the triangle inequality.
///
/// Degenerate input (a zero-length side, or a flat triangle where a
/// tangent length vanishes) is rejected before any division so the
/// curvature formula never divides by zero.
pub fn soddy_circles<F: Float>(a: Pnt2d<F>, b: Pnt2d<F>, c: Pnt2d<F>) -> Result<[Circle<F>; 3]> {
    let la = b.distance(&c);
    let lb = c.distance(&a);
    let lc = a.distance(&b);
    if la == F::zero() || lb == F::zero() || lc == F::zero() {
        return Err(GasketError::InvalidTriangle(
            "zero-length side (coincident vertices)".to_string(),
        ));
    }

    let two = F::one() + F::one();
    let p = (la + lb + lc) / two;
    for tangent_length in [p - la, p - lb, p - lc] {
        if !(tangent_length > F::zero()) || !tangent_length.is_finite() {
            return Err(GasketError::InvalidTriangle(format!(
                "tangent length {} is not positive; triangle is degenerate",
                lossy(tangent_length)
            )));
        }
    }

    Ok([
        Circle::from_curvature(a, (p - la).recip())?,
        Circle::from_curvature(b, (p - lb).recip())?,
        Circle::from_curvature(c, (p - lc).recip())?,
    ])
}
