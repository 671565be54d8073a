//! quadfit approximates a cubic Bézier curve by a sequence of quadratic
//! Bézier curves and quantifies the approximation error as a one-sided
//! Hausdorff distance: the worst case, over a dense sampling of the cubic,
//! of the nearest distance from the sample to the quadratic sequence.
//!
//! The building blocks are deliberately small and composable:
//! - [`Bezier`]: a const-generic Bézier curve of arbitrary order over any
//!   type implementing the minimal [`Point`] trait, evaluated either with
//!   incremental Bernstein weights or with De Casteljau's algorithm
//! - [`find_root::bisect`] / [`find_root::find_all_roots`]: bisection based
//!   scalar root finding over a bracketed interval
//! - [`minimize::find_minimum`]: global minimum of a smooth scalar function
//!   on a closed interval via its stationary points
//! - [`QuadraticBezier::distance_to_point`]: nearest distance from a point
//!   to one quadratic curve, built from the pieces above
//! - [`QuadSpline`] and [`hausdorff::max_deviation`]: the piecewise
//!   quadratic approximation and the deviation sweep itself
//!
//! The decomposition of a cubic into quadratics is an injected strategy
//! ([`CubicToQuad`]); [`UniformSplit`] ships as a simple default so the
//! crate is usable without an external converter.

use core::ops::{Add, Mul, Sub};

extern crate num_traits;
extern crate tinyvec;

pub mod bezier;
pub mod cubic_bezier;
pub mod export;
pub mod find_root;
pub mod hausdorff;
pub mod minimize;
pub mod point;
pub mod point_generic;
pub mod quadratic_bezier;

pub use bezier::Bezier;
pub use cubic_bezier::{CubicBezier, CubicToQuad, UniformSplit};
pub use hausdorff::{Deviation, QuadSpline};
pub use point::Point;
pub use point_generic::PointN;
pub use quadratic_bezier::QuadraticBezier;

/// The native floating point type of the library. All curve evaluation and
/// root finding happens at this precision regardless of the point's storage
/// scalar.
pub type NativeFloat = f64;

/// Convergence tolerance for root finding and the comparison tolerance used
/// throughout the tests.
pub const EPSILON: NativeFloat = 1e-8;
