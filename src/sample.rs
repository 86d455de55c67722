//! Seed triangle sampling.
//!
//! Draws three points uniformly from the unit square and rejects the
//! whole triple whenever the points are exactly collinear. Collinearity
//! has probability zero under continuous sampling, so the retry cap is
//! only a guard against discretized numeric backends.

use crate::gp::Pnt2d;
use crate::{GasketError, Result};
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Default retry budget for collinear triples.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

/// Samples three non-collinear points, uniform over the unit square.
///
/// The random source is injected so runs are reproducible under a
/// seeded generator. Returns `DegenerateSeed` when `max_attempts`
/// consecutive triples were collinear.
pub fn random_triangle<F, R>(rng: &mut R, max_attempts: u32) -> Result<[Pnt2d<F>; 3]>
where
    F: Float + SampleUniform,
    R: Rng + ?Sized,
{
    for _ in 0..max_attempts {
        let a = random_point(rng);
        let b = random_point(rng);
        let c = random_point(rng);
        if !collinear(a, b, c) {
            return Ok([a, b, c]);
        }
    }
    Err(GasketError::DegenerateSeed {
        attempts: max_attempts,
    })
}

/// True when the three points lie on one line.
///
/// The test is the determinant of the homogeneous coordinate matrix,
/// which reduces to the cross product of two edge vectors (twice the
/// signed triangle area). Exact zero only, matching the sampler's
/// rejection contract; near-degenerate triangles are valid seeds.
pub fn collinear<F: Float>(a: Pnt2d<F>, b: Pnt2d<F>, c: Pnt2d<F>) -> bool {
    (b - a).crossed(&(c - a)) == F::zero()
}

fn random_point<F, R>(rng: &mut R) -> Pnt2d<F>
where
    F: Float + SampleUniform,
    R: Rng + ?Sized,
{
    Pnt2d::from_coords(
        rng.gen_range(F::zero()..F::one()),
        rng.gen_range(F::zero()..F::one()),
    )
}
