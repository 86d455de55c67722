//! Gasket accumulation and the recursive refinement driver.
//!
//! The combinatorial refinement is carried out on an explicit work
//! stack of (triple, depth remaining) frames, so call-stack depth
//! stays bounded no matter the requested depth. The gasket itself is
//! a single owned append-only accumulator.

use crate::descartes::{descartes_circles, FilterPolicy};
use crate::gp::Circle;
use crate::sample::{self, random_triangle};
use crate::soddy::soddy_circles;
use crate::{precision, GasketError, Result};
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::collections::HashSet;

/// Default cap on the total number of circles.
pub const DEFAULT_MAX_CIRCLES: usize = 1 << 20;

/// Generates a gasket at the given depth with default settings and
/// thread-local entropy.
pub fn generate(depth: usize) -> Result<Gasket<f64>> {
    GasketBuilder::new(depth).build()
}

/// The accumulated circle set of an Apollonian gasket.
///
/// Order-irrelevant, seeded with exactly the three Soddy circles and
/// monotonically extended by refinement; circles are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Gasket<F> {
    circles: Vec<Circle<F>>,
    depth: usize,
    truncated: bool,
}

impl<F: Float> Gasket<F> {
    /// Returns the full circle set.
    #[inline]
    pub fn circles(&self) -> &[Circle<F>] {
        &self.circles
    }

    /// Returns the number of circles.
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// A built gasket always holds at least the Soddy triple.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Returns the refinement depth the gasket was built to.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True when refinement stopped early at the circle cap.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the first negative-curvature circle: the one that
    /// encloses the whole gasket. Absent at depth 0, where only the
    /// three positive-curvature seed circles exist.
    pub fn outer(&self) -> Option<&Circle<F>> {
        self.circles.iter().find(|c| c.is_enclosing())
    }

    /// The smallest circle count a well-conditioned run reaches at the
    /// given depth: 3^depth + 2.
    pub fn expected_minimum(depth: usize) -> usize {
        3usize
            .checked_pow(depth as u32)
            .and_then(|n| n.checked_add(2))
            .unwrap_or(usize::MAX)
    }

    /// True when the run produced fewer circles than expected for its
    /// depth. Usually means the tangency tolerance was too tight for
    /// the numeric backend. Non-fatal; the circles that were produced
    /// are still a valid partial gasket.
    pub fn under_generated(&self) -> bool {
        self.len() < Self::expected_minimum(self.depth)
    }
}

/// Configures and drives gasket generation.
#[derive(Debug, Clone)]
pub struct GasketBuilder<F> {
    depth: usize,
    tolerance: F,
    policy: FilterPolicy,
    max_circles: usize,
    max_seed_attempts: u32,
    dedup: bool,
}

impl<F: Float> GasketBuilder<F> {
    /// Creates a builder for the given refinement depth, with the f64
    /// tangency tolerance scaled to the backend.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            tolerance: F::from(precision::TANGENCY).unwrap_or_else(|| F::epsilon()),
            policy: FilterPolicy::default(),
            max_circles: DEFAULT_MAX_CIRCLES,
            max_seed_attempts: sample::DEFAULT_MAX_ATTEMPTS,
            dedup: false,
        }
    }

    /// Sets the tangency tolerance.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the candidate filtering policy.
    pub fn policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Caps the total number of circles. Refinement stops and marks the
    /// gasket truncated when the cap is reached.
    pub fn max_circles(mut self, max_circles: usize) -> Self {
        self.max_circles = max_circles;
        self
    }

    /// Caps seed sampling retries.
    pub fn max_seed_attempts(mut self, max_seed_attempts: u32) -> Self {
        self.max_seed_attempts = max_seed_attempts;
        self
    }

    /// Enables deduplication of coincident circles reached along
    /// different refinement paths, keyed on tolerance-rounded
    /// coordinates. Off by default, so circle counts include the
    /// duplicates that the under-generation threshold assumes.
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Builds a gasket from thread-local entropy.
    pub fn build(&self) -> Result<Gasket<F>>
    where
        F: SampleUniform,
    {
        self.build_with(&mut rand::thread_rng())
    }

    /// Builds a gasket from an injected random source, for reproducible
    /// runs under a seeded generator.
    pub fn build_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Gasket<F>>
    where
        F: SampleUniform,
    {
        let seed = self.seed_triple(rng)?;
        self.build_from(seed)
    }

    /// Builds a gasket from an explicit Soddy triple, bypassing seed
    /// sampling and the enclosing-circle guard.
    pub fn build_from(&self, seed: [Circle<F>; 3]) -> Result<Gasket<F>> {
        let mut gasket = Gasket {
            circles: seed.to_vec(),
            depth: self.depth,
            truncated: false,
        };
        let mut seen: Option<HashSet<(i64, i64, i64)>> = if self.dedup {
            let mut keys = HashSet::new();
            for circle in &seed {
                keys.insert(self.key(circle));
            }
            Some(keys)
        } else {
            None
        };

        let mut frames = vec![(seed, self.depth)];
        'refine: while let Some((triple, remaining)) = frames.pop() {
            if remaining == 0 {
                continue;
            }
            let accepted = descartes_circles(&triple, self.tolerance, self.policy)?;

            let mut added = Vec::with_capacity(accepted.len());
            for circle in accepted {
                if gasket.circles.len() >= self.max_circles {
                    gasket.truncated = true;
                    break 'refine;
                }
                if let Some(seen) = seen.as_mut() {
                    if !seen.insert(self.key(&circle)) {
                        continue;
                    }
                }
                gasket.circles.push(circle);
                added.push(circle);
            }

            // Every unordered pair from the working triple combines
            // with every newly accepted circle into a child frame.
            for &(i, j) in &[(0, 1), (0, 2), (1, 2)] {
                for circle in &added {
                    frames.push(([triple[i], triple[j], *circle], remaining - 1));
                }
            }
        }
        Ok(gasket)
    }

    /// Samples seed triangles until one yields a usable configuration:
    /// the trial expansion of its Soddy triple must contain the
    /// enclosing (negative-curvature) circle. Trial circles are
    /// discarded; only the Soddy triple seeds the gasket. Degenerate
    /// triangles restart the sampling attempt.
    fn seed_triple<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<[Circle<F>; 3]>
    where
        F: SampleUniform,
    {
        for _ in 0..self.max_seed_attempts {
            let [a, b, c] = random_triangle(rng, self.max_seed_attempts)?;
            let triple = match soddy_circles(a, b, c) {
                Ok(triple) => triple,
                Err(GasketError::InvalidTriangle(_)) => continue,
                Err(other) => return Err(other),
            };
            let trial = descartes_circles(&triple, self.tolerance, self.policy)?;
            if trial.iter().any(|circle| circle.is_enclosing()) {
                return Ok(triple);
            }
        }
        Err(GasketError::DegenerateSeed {
            attempts: self.max_seed_attempts,
        })
    }

    /// Dedup key: center and curvature rounded to the tolerance grid.
    fn key(&self, circle: &Circle<F>) -> (i64, i64, i64) {
        let quantize = |value: F| {
            (value / self.tolerance)
                .round()
                .to_i64()
                .unwrap_or(i64::MAX)
        };
        (
            quantize(circle.center().x()),
            quantize(circle.center().y()),
            quantize(circle.curvature()),
        )
    }
}
