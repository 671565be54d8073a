use super::*;
use crate::bezier::Bezier;
use crate::point::Point;
use crate::quadratic_bezier::QuadraticBezier;

/// A cubic Bezier curve defined by four control points: the starting point,
/// two successive control points and the ending point.
pub type CubicBezier<P> = Bezier<P, 4>;

/// Strategy for decomposing a cubic Bezier curve into quadratic segments.
///
/// Contract: the returned segments cover the cubic's full [0,1] parameter
/// range in increasing parameter order, i.e. the first segment starts at the
/// cubic's start point and the last segment ends at its end point, with each
/// segment starting where the previous one ended. Converters whose natural
/// output runs the other way must reverse it before returning.
pub trait CubicToQuad<P: Point> {
    fn convert(&self, cubic: &CubicBezier<P>) -> Vec<QuadraticBezier<P>>;
}

/// Simple built-in converter: splits the cubic into a fixed number of equal
/// parameter spans and replaces every span by a single quadratic whose
/// control point is the average of the span's two scaled cubic handles.
///
/// The per-span error shrinks with the cube of the span count, so a handful
/// of segments is enough for well behaved curves. Production converters
/// subdivide adaptively; this one exists so the deviation sweep can run
/// without an external collaborator.
#[derive(Debug, Clone, Copy)]
pub struct UniformSplit {
    segments: usize,
}

impl UniformSplit {
    pub fn new(segments: usize) -> Self {
        assert!(segments >= 1, "a decomposition needs at least one segment");
        UniformSplit { segments }
    }
}

impl<P> CubicToQuad<P> for UniformSplit
where
    P: Point,
{
    fn convert(&self, cubic: &CubicBezier<P>) -> Vec<QuadraticBezier<P>> {
        let mut quads = Vec::with_capacity(self.segments);
        let mut rest = *cubic;
        for i in 0..self.segments {
            let remaining = self.segments - i;
            let piece = if remaining == 1 {
                rest
            } else {
                // split off the next equal span of the *remaining* range
                let (head, tail) = rest.split(1.0 / remaining as NativeFloat);
                rest = tail;
                head
            };
            quads.push(piece.to_quadratic());
        }
        quads
    }
}

impl<P> Bezier<P, 4>
where
    P: Point,
{
    /// Lossy conversion to a single quadratic sharing the endpoints, with the
    /// midpoints of the two lines spanned by the scaled cubic handles
    /// (3*c1 - p0)/2 and (3*c2 - p3)/2 averaged into one control point:
    ///     ctrl = (3*c1 + 3*c2 - p0 - p3) / 4
    pub fn to_quadratic(&self) -> QuadraticBezier<P> {
        let [p0, c1, c2, p3] = self.control_points;
        let ctrl = (c1 * 3.0 + c2 * 3.0 - p0 - p3) * 0.25;
        Bezier::new([p0, ctrl, p3])
    }
}
