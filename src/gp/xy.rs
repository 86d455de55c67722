//! 2D coordinate pair.
//!
//! This is the foundation for the 2D geometric types. Used for
//! algebraic calculations such as the orientation test on seed
//! triangles.

use num_traits::Float;
use std::ops::{Add, Neg, Sub};

/// 2D cartesian coordinate entity {X, Y}.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XY<F> {
    x: F,
    y: F,
}

impl<F: Float> XY<F> {
    /// Creates an XY with given coordinates.
    #[inline]
    pub fn from_coords(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[inline]
    pub fn x(&self) -> F {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub fn y(&self) -> F {
        self.y
    }

    /// Returns the dot product with another XY.
    #[inline]
    pub fn dot(&self, other: &XY<F>) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Returns the 2D cross product (z component of the 3D cross).
    /// Zero exactly when the two vectors are parallel.
    #[inline]
    pub fn crossed(&self, other: &XY<F>) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared euclidean norm.
    #[inline]
    pub fn square_modulus(&self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Returns the euclidean norm.
    #[inline]
    pub fn modulus(&self) -> F {
        self.square_modulus().sqrt()
    }
}

impl<F: Float> Add for XY<F> {
    type Output = XY<F>;
    #[inline]
    fn add(self, other: XY<F>) -> XY<F> {
        XY::from_coords(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for XY<F> {
    type Output = XY<F>;
    #[inline]
    fn sub(self, other: XY<F>) -> XY<F> {
        XY::from_coords(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Neg for XY<F> {
    type Output = XY<F>;
    #[inline]
    fn neg(self) -> XY<F> {
        XY::from_coords(-self.x, -self.y)
    }
}
