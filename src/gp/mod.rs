//! Geometric primitives package.
//!
//! The foundation types of the engine: a raw coordinate pair, a 2D
//! point, and the curvature-form circle. All of them are generic over
//! the numeric backend `F: Float`, so the same engine runs under fixed
//! or extended precision without duplicated logic.

mod circle;
mod pnt2d;
mod xy;

// Re-export all types at module level (flat namespace)
pub use circle::Circle;
pub use pnt2d::Pnt2d;
pub use xy::XY;
