//! Descartes circle theorem solver and tangency filter.
//!
//! Given three mutually tangent circles, the curvature form of the
//! theorem (Descartes, 1643) yields two candidate curvatures, and the
//! complex center form (Lagarias/Mallows/Wilks, 2002) yields two
//! candidate center terms. The correct pairing of the two sign choices
//! is not algebraically obvious, so the solver emits all four
//! cross-combinations and defers correctness to the geometric tangency
//! filter. Over-generation here is deliberate, not an oversight.

use crate::gp::{Circle, Pnt2d};
use crate::{lossy, GasketError, Result};
use num_complex::Complex;
use num_traits::Float;
use std::ops::{Add, Mul};

/// Selects which generating circles a candidate must be tangent to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Check the candidate against all three generators.
    #[default]
    AllGenerators,
    /// Check against the first two generators only, leaving the third
    /// unchecked. Historical behavior kept for comparison runs.
    LegacyPair,
}

// Elementary symmetric polynomials, shared by the real curvature form
// and the complex center form.
fn e1<T: Copy + Add<Output = T>>(a: T, b: T, c: T) -> T {
    a + b + c
}

fn e2<T: Copy + Add<Output = T> + Mul<Output = T>>(a: T, b: T, c: T) -> T {
    a * b + b * c + c * a
}

/// Derives the raw candidate circles tangent to the three generators.
///
/// The curvature roots are k4 = e1(k) +/- 2*sqrt(e2(k)) and the center
/// roots are z4 = e1(z) +/- 2*sqrt(e2(z)) with z_i = k_i * (x_i + i*y_i);
/// each candidate recovers its center as (Re z4 / k4, Im z4 / k4). All
/// four root combinations are emitted; most configurations validate
/// only two of them.
///
/// A negative real discriminant e2(k) < 0 has no real curvature root
/// and is reported as `NegativeDiscriminant` rather than truncated. The
/// complex square root is total and needs no such guard. A vanishing
/// curvature root describes a straight line, not a circle, and is
/// dropped from the candidate list.
pub fn candidate_circles<F: Float>(
    c1: &Circle<F>,
    c2: &Circle<F>,
    c3: &Circle<F>,
) -> Result<Vec<Circle<F>>> {
    let two = F::one() + F::one();

    let discriminant = e2(c1.curvature(), c2.curvature(), c3.curvature());
    if discriminant < F::zero() {
        return Err(GasketError::NegativeDiscriminant(lossy(discriminant)));
    }
    let k_sum = e1(c1.curvature(), c2.curvature(), c3.curvature());
    let k_root = two * discriminant.sqrt();
    let (k_pos, k_neg) = (k_sum + k_root, k_sum - k_root);

    let z = |c: &Circle<F>| Complex::new(c.center().x(), c.center().y()) * c.curvature();
    let (z1, z2, z3) = (z(c1), z(c2), z(c3));
    let z_sum = e1(z1, z2, z3);
    let z_root = e2(z1, z2, z3).sqrt() * two;
    let (z_pos, z_neg) = (z_sum + z_root, z_sum - z_root);

    let mut candidates = Vec::with_capacity(4);
    for (z4, k4) in [(z_pos, k_pos), (z_pos, k_neg), (z_neg, k_pos), (z_neg, k_neg)] {
        if k4 == F::zero() || !k4.is_finite() {
            continue;
        }
        let center = Pnt2d::from_coords(z4.re / k4, z4.im / k4);
        candidates.push(Circle::from_curvature(center, k4)?);
    }
    Ok(candidates)
}

/// Keeps the candidates that are tangent to the generating circles.
///
/// This is a pure filter: every candidate is evaluated against the full
/// generator set selected by `policy`, and a new collection is
/// returned. Nothing is removed mid-iteration.
pub fn filter_tangent<F: Float>(
    candidates: Vec<Circle<F>>,
    generators: &[Circle<F>; 3],
    tolerance: F,
    policy: FilterPolicy,
) -> Vec<Circle<F>> {
    let checked: &[Circle<F>] = match policy {
        FilterPolicy::AllGenerators => &generators[..],
        FilterPolicy::LegacyPair => &generators[..2],
    };
    candidates
        .into_iter()
        .filter(|candidate| checked.iter().all(|g| g.is_tangent(candidate, tolerance)))
        .collect()
}

/// Solves and filters in one step: the 0 to 4 validated circles tangent
/// to all three generators.
pub fn descartes_circles<F: Float>(
    generators: &[Circle<F>; 3],
    tolerance: F,
    policy: FilterPolicy,
) -> Result<Vec<Circle<F>>> {
    let candidates = candidate_circles(&generators[0], &generators[1], &generators[2])?;
    Ok(filter_tangent(candidates, generators, tolerance, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision;
    use crate::soddy::soddy_circles;

    fn equilateral_triple() -> [Circle<f64>; 3] {
        soddy_circles(
            Pnt2d::from_coords(0.0, 0.0),
            Pnt2d::from_coords(1.0, 0.0),
            Pnt2d::from_coords(0.5, 3.0_f64.sqrt() / 2.0),
        )
        .unwrap()
    }

    #[test]
    fn test_candidates_cover_all_four_combinations() {
        let [c1, c2, c3] = equilateral_triple();
        let candidates = candidate_circles(&c1, &c2, &c3).unwrap();
        assert_eq!(candidates.len(), 4);

        // Two candidates per curvature root
        let k_pos = 6.0 + 4.0 * 3.0_f64.sqrt();
        let k_neg = 6.0 - 4.0 * 3.0_f64.sqrt();
        let pos = candidates.iter().filter(|c| (c.curvature() - k_pos).abs() < 1e-9);
        let neg = candidates.iter().filter(|c| (c.curvature() - k_neg).abs() < 1e-9);
        assert_eq!(pos.count(), 2);
        assert_eq!(neg.count(), 2);
    }

    #[test]
    fn test_equilateral_inner_and_outer_circles() {
        // For the unit equilateral seed the validated solutions are the
        // inscribed circle with curvature 6 + 4*sqrt(3) and the
        // enclosing circle with curvature 6 - 4*sqrt(3), both at the
        // centroid.
        let generators = equilateral_triple();
        let accepted = descartes_circles(&generators, precision::TANGENCY, FilterPolicy::AllGenerators)
            .unwrap();
        assert_eq!(accepted.len(), 2);

        let inner = accepted.iter().find(|c| c.curvature() > 0.0).unwrap();
        let outer = accepted.iter().find(|c| c.is_enclosing()).unwrap();
        assert!((inner.curvature() - (6.0 + 4.0 * 3.0_f64.sqrt())).abs() < 1e-9);
        assert!((outer.curvature() - (6.0 - 4.0 * 3.0_f64.sqrt())).abs() < 1e-9);

        let centroid = Pnt2d::from_coords(0.5, 3.0_f64.sqrt() / 6.0);
        assert!(inner.center().is_equal(&centroid, 1e-9));
        assert!(outer.center().is_equal(&centroid, 1e-9));

        for circle in &accepted {
            for generator in &generators {
                assert!(circle.is_tangent(generator, precision::TANGENCY));
            }
        }
    }

    #[test]
    fn test_cross_paired_candidates_are_rejected_unfiltered() {
        // The two cross-paired sign combinations mismatch curvature and
        // center and must fail validation.
        let [c1, c2, c3] = equilateral_triple();
        let raw = candidate_circles(&c1, &c2, &c3).unwrap();
        let rejected: Vec<_> = raw
            .iter()
            .filter(|c| !c.is_tangent(&c1, precision::TANGENCY))
            .collect();
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_legacy_pair_policy_is_no_stricter() {
        let generators = equilateral_triple();
        let all = descartes_circles(&generators, precision::TANGENCY, FilterPolicy::AllGenerators)
            .unwrap();
        let legacy = descartes_circles(&generators, precision::TANGENCY, FilterPolicy::LegacyPair)
            .unwrap();
        assert!(legacy.len() >= all.len());
        for circle in &all {
            assert!(legacy.contains(circle));
        }
    }

    #[test]
    fn test_negative_discriminant_is_reported() {
        // Curvatures 1, 1, -3 give e2 = 1 - 3 - 3 = -5; there is no
        // real curvature root and the solver must say so.
        let c1 = Circle::from_curvature(Pnt2d::from_coords(0.0, 0.0), 1.0).unwrap();
        let c2 = Circle::from_curvature(Pnt2d::from_coords(2.0, 0.0), 1.0).unwrap();
        let c3 = Circle::from_curvature(Pnt2d::from_coords(0.0, 2.0), -3.0).unwrap();
        assert!(matches!(
            candidate_circles(&c1, &c2, &c3),
            Err(GasketError::NegativeDiscriminant(_))
        ));
    }

    #[test]
    fn test_zero_tolerance_rejects_everything() {
        let generators = equilateral_triple();
        let accepted =
            descartes_circles(&generators, 0.0, FilterPolicy::AllGenerators).unwrap();
        assert!(accepted.is_empty());
    }
}
