//! Plain-text coordinate dumps for external visualization.
//!
//! Every writer emits one `"<x> <y>"` line per sample using the default
//! float formatting, the format the companion gnuplot-style tooling expects.
//! The writers take any [`std::io::Write`] so callers can render into memory
//! first and only touch the filesystem once everything has been produced.

use std::io::{self, Write};

use super::*;
use crate::cubic_bezier::CubicBezier;
use crate::hausdorff::QuadSpline;
use crate::point::Point;

/// Sample step for the cubic curve dump, 1001 lines over [0,1].
pub const CUBIC_SAMPLE_STEP: NativeFloat = 1e-3;

/// Sample step within each quadratic segment, 101 lines per segment.
pub const QUAD_SAMPLE_STEP: NativeFloat = 1e-2;

fn write_point<P, W>(w: &mut W, point: P) -> io::Result<()>
where
    P: Point,
    W: Write,
{
    for i in 0..P::DIM {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "{}", point.axis(i))?;
    }
    writeln!(w)
}

/// Dump the cubic curve sampled at t from 0 to 1 in 'step' increments,
/// endpoints included: ceil(1/step) + 1 lines.
pub fn write_cubic_samples<P, W>(
    w: &mut W,
    cubic: &CubicBezier<P>,
    step: NativeFloat,
) -> io::Result<()>
where
    P: Point,
    W: Write,
{
    let nsteps = (1.0 / step).ceil() as usize;
    for i in 0..=nsteps {
        let t = (i as NativeFloat * step).min(1.0);
        write_point(w, cubic.eval(t))?;
    }
    Ok(())
}

/// Dump every segment of the spline sampled at t from 1 down to 0 in 'step'
/// increments (segment-local reversed order, the order the companion plot
/// scripts expect), segments concatenated in spline order.
pub fn write_quad_samples<P, W>(
    w: &mut W,
    spline: &QuadSpline<P>,
    step: NativeFloat,
) -> io::Result<()>
where
    P: Point,
    W: Write,
{
    let nsteps = (1.0 / step).ceil() as usize;
    for quad in spline.segments() {
        for i in (0..=nsteps).rev() {
            let t = (i as NativeFloat * step).min(1.0);
            write_point(w, quad.eval(t))?;
        }
    }
    Ok(())
}

/// Dump the segment boundary points: the first segment's start point followed
/// by every segment's end point, spline.len() + 1 lines.
pub fn write_boundary_points<P, W>(w: &mut W, spline: &QuadSpline<P>) -> io::Result<()>
where
    P: Point,
    W: Write,
{
    for point in spline.boundary_points() {
        write_point(w, point)?;
    }
    Ok(())
}
