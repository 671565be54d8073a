//! Piecewise quadratic approximations and the worst-case deviation sweep.

use super::*;
use crate::cubic_bezier::CubicBezier;
use crate::point::Point;
use crate::quadratic_bezier::QuadraticBezier;

/// Parameter increment of the deviation sweep over the cubic curve.
pub const SWEEP_STEP: NativeFloat = 1e-4;

/// An ordered sequence of quadratic Bezier curves approximating one cubic
/// curve over its full parameter range: segment 0 covers the start of the
/// cubic, the last segment its end. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadSpline<P>
where
    P: Point,
{
    segments: Vec<QuadraticBezier<P>>,
}

impl<P> QuadSpline<P>
where
    P: Point,
{
    /// Wrap an ordered segment sequence, e.g. the output of a
    /// [`crate::CubicToQuad`] converter.
    pub fn new(segments: Vec<QuadraticBezier<P>>) -> Self {
        assert!(
            !segments.is_empty(),
            "a quad spline needs at least one segment"
        );
        QuadSpline { segments }
    }

    pub fn segments(&self) -> &[QuadraticBezier<P>] {
        &self.segments
    }

    /// Number of quadratic segments, always at least 1.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Nearest distance from 'point' to the piecewise approximation as a
    /// whole: the minimum over all segments of the per-segment distance,
    /// independent of which segment is nearest.
    pub fn distance_to_point(&self, point: P) -> NativeFloat {
        self.segments
            .iter()
            .map(|quad| quad.distance_to_point(point))
            .fold(NativeFloat::INFINITY, NativeFloat::min)
    }

    /// The points where segments meet: the first segment's start point
    /// followed by every segment's end point, len() + 1 points in order.
    pub fn boundary_points(&self) -> Vec<P> {
        let mut bounds = Vec::with_capacity(self.segments.len() + 1);
        bounds.push(self.segments[0].start());
        for quad in &self.segments {
            bounds.push(quad.end());
        }
        bounds
    }
}

/// Worst-case deviation found by a sweep: the maximum distance, the cubic
/// parameter it occurred at and the cubic point at that parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation<P>
where
    P: Point,
{
    pub distance: NativeFloat,
    pub t: NativeFloat,
    pub point: P,
}

/// Sweep t from 0 to 1 in 'step' increments over the cubic curve and compute
/// the nearest distance of every sample to the spline, keeping the worst
/// case. This approximates the one-sided Hausdorff distance from the cubic
/// to its piecewise quadratic approximation (one-sided because only points
/// on the cubic are probed, which is enough to judge the order of the error).
pub fn max_deviation<P>(
    cubic: &CubicBezier<P>,
    spline: &QuadSpline<P>,
    step: NativeFloat,
) -> Deviation<P>
where
    P: Point,
{
    assert!(step > 0.0 && step <= 1.0, "sweep step must be in (0, 1]");
    let nsteps = (1.0 / step).ceil() as usize;
    (0..=nsteps)
        .map(|i| (i as NativeFloat * step).min(1.0))
        .fold(
            Deviation {
                distance: 0.0,
                t: 0.0,
                point: cubic.start(),
            },
            |worst, t| {
                let point = cubic.eval(t);
                let distance = spline.distance_to_point(point);
                if distance > worst.distance {
                    Deviation { distance, t, point }
                } else {
                    worst
                }
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubic_bezier::CubicToQuad;
    use crate::{Bezier, PointN, UniformSplit};

    type P2 = PointN<f64, 2>;

    fn sample_cubic() -> CubicBezier<P2> {
        Bezier::new([
            PointN::new([0f64, 0f64]),
            PointN::new([-22f64, -22f64]),
            PointN::new([-8f64, 52f64]),
            PointN::new([10f64, 0f64]),
        ])
    }

    #[test]
    fn distance_to_spline_takes_nearest_segment() {
        // two straight segments along the x axis from 0 to 4
        let spline = QuadSpline::new(vec![
            Bezier::new([
                PointN::new([0f64, 0f64]),
                PointN::new([1f64, 0f64]),
                PointN::new([2f64, 0f64]),
            ]),
            Bezier::new([
                PointN::new([2f64, 0f64]),
                PointN::new([3f64, 0f64]),
                PointN::new([4f64, 0f64]),
            ]),
        ]);
        // nearest point is (3,0) on the second segment
        let d = spline.distance_to_point(PointN::new([3f64, 2f64]));
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn boundary_points_order_and_count() {
        let cubic = sample_cubic();
        let spline = QuadSpline::new(UniformSplit::new(4).convert(&cubic));
        let bounds = spline.boundary_points();
        assert_eq!(bounds.len(), spline.len() + 1);
        assert_eq!(bounds[0], cubic.start());
        assert_eq!(bounds[bounds.len() - 1], cubic.end());
    }

    #[test]
    fn deviation_regression_ceiling() {
        // the concrete scenario from the original driver: the worst deviation
        // of a few-segment decomposition must be small and positive, on the
        // order of 1 rather than 10 (a regression ceiling, not an exact value)
        let cubic = sample_cubic();
        let spline = QuadSpline::new(UniformSplit::new(4).convert(&cubic));
        // coarser sweep than the demo driver to keep the test fast
        let worst = max_deviation(&cubic, &spline, 1e-3);
        assert!(worst.distance > 0.0);
        assert!(worst.distance < 1.0);
        assert!(worst.t >= 0.0 && worst.t <= 1.0);
        // the reported point belongs to the cubic at the reported parameter
        assert!(worst.point.distance(cubic.eval(worst.t)) < EPSILON);
    }

    #[test]
    fn deviation_of_exact_decomposition_is_tiny() {
        // a degenerate "cubic" that is itself a straight line is reproduced
        // exactly by its quadratic decomposition
        let cubic: CubicBezier<P2> = Bezier::new([
            PointN::new([0f64, 0f64]),
            PointN::new([1f64, 1f64]),
            PointN::new([2f64, 2f64]),
            PointN::new([3f64, 3f64]),
        ]);
        let spline = QuadSpline::new(UniformSplit::new(2).convert(&cubic));
        let worst = max_deviation(&cubic, &spline, 1e-2);
        assert!(worst.distance < 1e-6);
    }

    #[test]
    #[should_panic]
    fn empty_spline_is_rejected() {
        let _ = QuadSpline::<P2>::new(Vec::new());
    }
}
