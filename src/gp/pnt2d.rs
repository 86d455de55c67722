//! 2D point.

use crate::gp::XY;
use num_traits::Float;
use std::ops::Sub;

/// A 2D point in cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pnt2d<F> {
    coord: XY<F>,
}

impl<F: Float> Pnt2d<F> {
    /// Creates a point with given coordinates.
    #[inline]
    pub fn from_coords(x: F, y: F) -> Self {
        Self {
            coord: XY::from_coords(x, y),
        }
    }

    /// Creates a point from an XY.
    #[inline]
    pub fn from_xy(xy: XY<F>) -> Self {
        Self { coord: xy }
    }

    /// Returns the X coordinate.
    #[inline]
    pub fn x(&self) -> F {
        self.coord.x()
    }

    /// Returns the Y coordinate.
    #[inline]
    pub fn y(&self) -> F {
        self.coord.y()
    }

    /// Returns the XY.
    #[inline]
    pub fn xy(&self) -> XY<F> {
        self.coord
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(&self, other: &Pnt2d<F>) -> F {
        self.square_distance(other).sqrt()
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn square_distance(&self, other: &Pnt2d<F>) -> F {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Checks if this point is equal to another within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Pnt2d<F>, tolerance: F) -> bool {
        self.distance(other) <= tolerance
    }
}

impl<F: Float> Sub for Pnt2d<F> {
    type Output = XY<F>;
    #[inline]
    fn sub(self, other: Pnt2d<F>) -> XY<F> {
        self.coord - other.coord
    }
}
